//! Display mode

use serde::Deserialize;
use serde::Serialize;

/// The grid's display mode.
///
/// Pure presentation state: toggling the theme never changes what the
/// pipeline produces, only how the host styles it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode (the default).
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Theme {
    /// Flips between light and dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
