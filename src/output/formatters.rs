//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use owo_colors::{OwoColorize, Style};
use supports_color::Stream;

/// An sRGB color
pub type Rgb = (u8, u8, u8);

/// Light or dark board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Colors used for a colored board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub high_contrast: bool,
}

/// Something on the board that gets a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Background,
    Letter,
    Tile(LetterStatus),
}

// Columns: light, dark, light high contrast, dark high contrast
const BACKGROUND: [Rgb; 4] = [(255, 255, 255), (18, 18, 19), (255, 255, 255), (18, 18, 19)];
const LETTER: [Rgb; 4] = [
    (255, 255, 255),
    (215, 218, 220),
    (255, 255, 255),
    (255, 255, 255),
];
const WRONG: [Rgb; 4] = [(120, 124, 126), (58, 58, 60), (120, 124, 126), (58, 58, 60)];
const MISPLACED: [Rgb; 4] = [(201, 180, 88), (181, 159, 59), (133, 192, 249), (133, 192, 249)];
const RIGHT: [Rgb; 4] = [(106, 170, 100), (83, 141, 78), (245, 121, 58), (245, 121, 58)];

impl Palette {
    #[must_use]
    pub const fn color(self, target: ColorTarget) -> Rgb {
        let column = match self.theme {
            Theme::Light => 0,
            Theme::Dark => 1,
        } + if self.high_contrast { 2 } else { 0 };

        let row = match target {
            ColorTarget::Background => &BACKGROUND,
            ColorTarget::Letter => &LETTER,
            ColorTarget::Tile(LetterStatus::Wrong) => &WRONG,
            ColorTarget::Tile(LetterStatus::Misplaced) => &MISPLACED,
            ColorTarget::Tile(LetterStatus::Right) => &RIGHT,
        };
        row[column]
    }
}

/// How feedback rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// ` A ` right, `(A)` misplaced, ` _ ` wrong
    Plain,
    /// 24-bit colored tiles
    Color(Palette),
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::Color(Palette::default())
    }
}

impl RenderStyle {
    /// Colored tiles if stdout takes colors, plain markers otherwise
    ///
    /// Honors `NO_COLOR` and `FORCE_COLOR`.
    #[must_use]
    pub fn for_stdout(palette: Palette) -> Self {
        if supports_color::on(Stream::Stdout).is_some() {
            Self::Color(palette)
        } else {
            Self::Plain
        }
    }
}

fn plain_tile(letter: char, status: LetterStatus) -> String {
    match status {
        LetterStatus::Right => format!(" {letter} "),
        LetterStatus::Misplaced => format!("({letter})"),
        LetterStatus::Wrong => " _ ".to_string(),
    }
}

/// Format one feedback row
#[must_use]
pub fn render_feedback(feedback: &Feedback, style: RenderStyle) -> String {
    let tiles = feedback
        .iter()
        .map(|(letter, status)| (char::from(letter).to_ascii_uppercase(), status));

    match style {
        RenderStyle::Plain => tiles
            .map(|(letter, status)| format!(" {}", plain_tile(letter, status)))
            .collect(),
        RenderStyle::Color(palette) => {
            let (fr, fg, fb) = palette.color(ColorTarget::Letter);
            let (br, bg, bb) = palette.color(ColorTarget::Background);
            let separator = " ".style(Style::new().on_truecolor(br, bg, bb)).to_string();
            let mut row = String::new();

            for (i, (letter, status)) in tiles.enumerate() {
                if i > 0 {
                    row.push_str(&separator);
                }
                let (tr, tg, tb) = palette.color(ColorTarget::Tile(status));
                let tile_style = Style::new()
                    .truecolor(fr, fg, fb)
                    .on_truecolor(tr, tg, tb);
                row.push_str(&format!(" {letter} ").style(tile_style).to_string());
            }
            row
        }
    }
}

/// Format a share grid, one emoji row per guess
#[must_use]
pub fn share_grid(history: &[Feedback]) -> String {
    history
        .iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTH, Word, classify};

    fn feedback(guess: &str, answer: &str) -> Feedback {
        classify(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn plain_row() {
        let row = render_feedback(&feedback("trace", "crane"), RenderStyle::Plain);
        assert_eq!(row, "  _   R   A  (C)  E ");
    }

    #[test]
    fn plain_row_all_wrong() {
        let row = render_feedback(&feedback("built", "crane"), RenderStyle::Plain);
        assert_eq!(row, "  _   _   _   _   _ ");
    }

    #[test]
    fn color_row_uses_truecolor_sequences() {
        let row = render_feedback(
            &feedback("trace", "crane"),
            RenderStyle::Color(Palette::default()),
        );

        // Letter color on the wrong tile, then a dark board gap, then a right tile
        let wrong_t = "\x1b[38;2;215;218;220;48;2;58;58;60m T \x1b[0m";
        let gap = "\x1b[48;2;18;18;19m \x1b[0m";
        let right_r = "\x1b[38;2;215;218;220;48;2;83;141;78m R \x1b[0m";
        assert!(row.starts_with(&format!("{wrong_t}{gap}{right_r}{gap}")));

        let misplaced_c = "\x1b[38;2;215;218;220;48;2;181;159;59m C \x1b[0m";
        assert!(row.contains(misplaced_c));
        assert_eq!(row.matches(gap).count(), WORD_LENGTH - 1);
    }

    #[test]
    fn light_high_contrast_row() {
        let palette = Palette {
            theme: Theme::Light,
            high_contrast: true,
        };
        let row = render_feedback(&feedback("crane", "crane"), RenderStyle::Color(palette));

        let right_c = "\x1b[38;2;255;255;255;48;2;245;121;58m C \x1b[0m";
        assert!(row.starts_with(right_c));
        assert!(row.contains("\x1b[48;2;255;255;255m \x1b[0m"));
    }

    #[test]
    fn palette_columns() {
        let dark = Palette::default();
        assert_eq!(dark.color(ColorTarget::Background), (18, 18, 19));
        assert_eq!(dark.color(ColorTarget::Tile(LetterStatus::Right)), (83, 141, 78));

        let light = Palette {
            theme: Theme::Light,
            high_contrast: false,
        };
        assert_eq!(light.color(ColorTarget::Tile(LetterStatus::Misplaced)), (201, 180, 88));

        let light_hc = Palette {
            theme: Theme::Light,
            high_contrast: true,
        };
        assert_eq!(light_hc.color(ColorTarget::Tile(LetterStatus::Right)), (245, 121, 58));

        let dark_hc = Palette {
            theme: Theme::Dark,
            high_contrast: true,
        };
        assert_eq!(dark_hc.color(ColorTarget::Letter), (255, 255, 255));
        assert_eq!(dark_hc.color(ColorTarget::Tile(LetterStatus::Wrong)), (58, 58, 60));
    }

    #[test]
    fn share_grid_rows() {
        let history = vec![feedback("trace", "crane"), feedback("crane", "crane")];
        assert_eq!(share_grid(&history), "⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }
}
