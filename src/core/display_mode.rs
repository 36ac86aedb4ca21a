/// Light/dark preference for the whole interface.
///
/// The value is passed down explicitly to whatever needs it; nothing reads it
/// from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    pub dark: bool,
}

impl DisplayMode {
    pub const DARK: DisplayMode = DisplayMode { dark: true };
    pub const LIGHT: DisplayMode = DisplayMode { dark: false };

    pub fn from_dark(dark: bool) -> Self {
        Self { dark }
    }

    /// Reducer for the single transition this value has.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn label(self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::DARK
    }
}
