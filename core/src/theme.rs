use serde::{Deserialize, Serialize};

/// Light/dark preference for the whole page.
///
/// Persists through local storage as `"light"` / `"dark"`; the webapp owns
/// the single writer and applies the matching class to the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve the theme at shell mount: a persisted choice wins, then the
    /// operating system preference, then dark.
    pub fn initial(saved: Option<Theme>, os_prefers_dark: Option<bool>) -> Theme {
        if let Some(theme) = saved {
            return theme;
        }
        match os_prefers_dark {
            Some(false) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_original() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn initial_resolution_precedence() {
        // Saved value always wins.
        assert_eq!(Theme::initial(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::initial(Some(Theme::Dark), Some(false)), Theme::Dark);
        // Then the OS preference.
        assert_eq!(Theme::initial(None, Some(false)), Theme::Light);
        assert_eq!(Theme::initial(None, Some(true)), Theme::Dark);
        // Then the fixed default.
        assert_eq!(Theme::initial(None, None), Theme::Dark);
    }

    #[test]
    fn serializes_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }
}
