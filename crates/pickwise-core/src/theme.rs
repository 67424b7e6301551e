//! Visual theme identifiers.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Visual theme for the terminal surface.
///
/// The theme is the only piece of client state that survives a restart;
/// it is persisted by the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Theme::from_str("Dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
        assert!(Theme::from_str("sepia").is_err());
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
