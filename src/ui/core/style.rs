/// Terminal colors the dashboard draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// The terminal's own foreground/background.
    Reset,
    /// One of the 256 palette entries.
    Indexed(u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const GREEN: Self = Self::Indexed(2);
    pub const LIGHT_GRAY: Self = Self::Indexed(7);
}

/// Text attributes. Only bold is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u8);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// `None` colors leave whatever the terminal already shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    pub fn bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    pub fn add_mod(self, m: Mod) -> Self {
        Self {
            mods: Mod(self.mods.0 | m.0),
            ..self
        }
    }
}

/// The four styles used for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styles {
    pub default: Style,
    /// Selection highlight.
    pub inverted: Style,
    /// Column headers.
    pub bold: Style,
    /// Box borders and box interiors.
    pub box_line: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            default: Style::default().fg(Color::Reset).bg(Color::Reset),
            inverted: Style::default().fg(Color::BLACK).bg(Color::LIGHT_GRAY),
            bold: Style::default().add_mod(Mod::BOLD),
            box_line: Style::default().fg(Color::GREEN),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
