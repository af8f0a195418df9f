//! Parrot/neon theme tokens for the xray TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (headings, focus)
//! - **Positive**: Neon green (true flags)
//! - **Negative**: Hot pink (false flags, errors)
//! - **Warning**: Neon orange (alerts)
//! - **Neutral**: Cool purple (numeric values)
//! - **Muted**: Steel blue (borders, descriptions, empty values)

use ratatui::style::{Color, Modifier, Style};

use xray_core::StatDatum;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a statistic's value, by kind.
    pub fn datum_color(&self, datum: &StatDatum) -> Color {
        match datum {
            StatDatum::Bool(true) => self.positive,
            StatDatum::Bool(false) => self.negative,
            StatDatum::Integer(_) | StatDatum::Float(_) => self.neutral,
            StatDatum::Text(_) | StatDatum::List(_) | StatDatum::Other(_) => self.text_primary,
            StatDatum::Null => self.muted,
        }
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn description(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
