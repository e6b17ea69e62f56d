//! Color palettes and glyphs for the sitenav TUI.
//!
//! The dark palette follows Kanagawa Wave, the light one Kanagawa Lotus. Both have a
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use sitenav_types::ThemeMode;
use sitenav_types::ui::UiOptions;

mod wave {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const TEXT: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const LINK: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const ACCENT: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

mod lotus {
    use super::Color;

    pub const BG: Color = Color::Rgb(242, 236, 188); // lotusWhite3
    pub const BG_PANEL: Color = Color::Rgb(231, 219, 160); // lotusWhite2
    pub const BG_HIGHLIGHT: Color = Color::Rgb(220, 213, 172); // lotusWhite1
    pub const BORDER: Color = Color::Rgb(160, 154, 190); // lotusViolet2
    pub const TEXT: Color = Color::Rgb(84, 84, 100); // lotusInk1
    pub const TEXT_MUTED: Color = Color::Rgb(138, 137, 128); // lotusGray3
    pub const PRIMARY: Color = Color::Rgb(98, 76, 131); // lotusViolet4
    pub const LINK: Color = Color::Rgb(77, 105, 155); // lotusBlue4
    pub const ACCENT: Color = Color::Rgb(204, 109, 0); // lotusOrange
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub link: Color,
    pub accent: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: wave::BG,
            bg_panel: wave::BG_PANEL,
            bg_highlight: wave::BG_HIGHLIGHT,
            border: wave::BORDER,
            text: wave::TEXT,
            text_muted: wave::TEXT_MUTED,
            primary: wave::PRIMARY,
            link: wave::LINK,
            accent: wave::ACCENT,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: lotus::BG,
            bg_panel: lotus::BG_PANEL,
            bg_highlight: lotus::BG_HIGHLIGHT,
            border: lotus::BORDER,
            text: lotus::TEXT,
            text_muted: lotus::TEXT_MUTED,
            primary: lotus::PRIMARY,
            link: lotus::LINK,
            accent: lotus::ACCENT,
        }
    }

    #[must_use]
    pub fn high_contrast(theme: ThemeMode) -> Self {
        let (bg, text, muted) = if theme.is_dark() {
            (Color::Black, Color::White, Color::Gray)
        } else {
            (Color::White, Color::Black, Color::DarkGray)
        };
        Self {
            bg,
            bg_panel: bg,
            bg_highlight: muted,
            border: text,
            text,
            text_muted: muted,
            primary: text,
            link: if theme.is_dark() {
                Color::Cyan
            } else {
                Color::Blue
            },
            accent: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(theme: ThemeMode, options: UiOptions) -> Palette {
    match (options.high_contrast, theme) {
        (true, theme) => Palette::high_contrast(theme),
        (false, ThemeMode::Dark) => Palette::dark(),
        (false, ThemeMode::Light) => Palette::light(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub menu: &'static str,
    pub close: &'static str,
    pub sun: &'static str,
    pub moon: &'static str,
    pub language: &'static str,
    pub link: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            menu: "=",
            close: "x",
            sun: "*",
            moon: "C",
            language: "@",
            link: ">",
            separator: "|",
        }
    } else {
        Glyphs {
            menu: "☰",
            close: "✕",
            sun: "☀",
            moon: "☾",
            language: "⌘",
            link: "›",
            separator: "·",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default().fg(palette.text).bg(palette.bg_highlight)
    }

    /// Focus ring: applied on top of the element's own style.
    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn dimmed(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM)
    }
}
