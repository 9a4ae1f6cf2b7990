use crossterm::style::Color;

/// Which palette the presentation layer renders with.
///
/// Dark is the default; the user can toggle at any point and the choice
/// survives starting a new class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The palette for this mode
    pub fn palette(self) -> Theme {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

/// Terminal color palette for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Body text and member names
    pub text: Color,
    /// Hints and de-emphasized counts
    pub secondary: Color,
    /// Rule lines between group cards
    pub border: Color,
    /// Titles and group names
    pub primary: Color,
    /// Confirmation messages
    pub success: Color,
    /// Reshuffle feedback
    pub accent: Color,
}

pub const LIGHT: Theme = Theme {
    text: Color::Rgb { r: 45, g: 52, b: 54 },
    secondary: Color::Rgb {
        r: 99,
        g: 110,
        b: 114,
    },
    border: Color::Rgb {
        r: 233,
        g: 236,
        b: 239,
    },
    primary: Color::Rgb {
        r: 53,
        g: 132,
        b: 228,
    },
    success: Color::Rgb {
        r: 51,
        g: 209,
        b: 122,
    },
    accent: Color::Rgb {
        r: 246,
        g: 97,
        b: 81,
    },
};

pub const DARK: Theme = Theme {
    text: Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    },
    secondary: Color::Rgb {
        r: 176,
        g: 176,
        b: 176,
    },
    border: Color::Rgb {
        r: 58,
        g: 58,
        b: 74,
    },
    primary: Color::Rgb {
        r: 98,
        g: 160,
        b: 234,
    },
    success: Color::Rgb {
        r: 87,
        g: 227,
        b: 137,
    },
    accent: Color::Rgb {
        r: 237,
        g: 51,
        b: 59,
    },
};
