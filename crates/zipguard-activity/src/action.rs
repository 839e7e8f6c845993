//! Supported activity operations.

use std::fmt;
use std::str::FromStr;

/// Operation an activity can perform.
///
/// Closed set: any other action string fails to parse and the activity
/// answers with the `NOK` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Extract a zip archive into a directory.
    Unzip,
}

impl Action {
    /// Every supported action.
    pub const ALL: [Self; 1] = [Self::Unzip];

    /// Returns the wire name of this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unzip => "unzip",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an action string names no supported action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedAction(pub String);

impl fmt::Display for UnsupportedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported action: {}", self.0)
    }
}

impl std::error::Error for UnsupportedAction {}

impl FromStr for Action {
    type Err = UnsupportedAction;

    /// Matches the wire name exactly; `"Unzip"` is not `"unzip"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnsupportedAction(s.to_string()))
    }
}
