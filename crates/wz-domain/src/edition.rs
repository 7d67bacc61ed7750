//! Edition module - the two supported releases of the WZ classification

use std::fmt;
use thiserror::Error;

/// Error returned when an edition identifier is not one of the supported values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid WZ version '{value}'. Valid versions: {}", Edition::valid_values())]
pub struct EditionError {
    /// The rejected identifier, verbatim
    pub value: String,
}

/// Edition of the WZ classification
///
/// The two editions are structurally incompatible; codes are only comparable
/// within one edition. Cross-edition links go through the concordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edition {
    /// WZ 2008, the final edition kept for compatibility
    Wz2008,

    /// WZ 2025, the current official edition
    Wz2025,
}

impl Edition {
    /// All supported editions, oldest first
    pub const ALL: [Edition; 2] = [Edition::Wz2008, Edition::Wz2025];

    /// Get the edition identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Wz2008 => "2008",
            Edition::Wz2025 => "2025",
        }
    }

    /// Parse an edition identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use wz_domain::Edition;
    ///
    /// assert_eq!(Edition::parse("2025").unwrap(), Edition::Wz2025);
    /// assert!(Edition::parse("2020").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, EditionError> {
        match s.trim() {
            "2008" => Ok(Edition::Wz2008),
            "2025" => Ok(Edition::Wz2025),
            _ => Err(EditionError {
                value: s.to_string(),
            }),
        }
    }

    /// The edition on the other side of the concordance
    pub fn other(&self) -> Self {
        match self {
            Edition::Wz2008 => Edition::Wz2025,
            Edition::Wz2025 => Edition::Wz2008,
        }
    }

    /// Comma-separated list of all valid identifiers, for error messages
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(Edition::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Edition {
    type Err = EditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Edition {
    type Error = EditionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Conversion of caller-supplied edition identifiers
///
/// Lets entry points accept either the enum or a free-form string while
/// keeping validation in one place.
pub trait IntoEdition {
    /// Resolve into a supported edition
    fn into_edition(self) -> Result<Edition, EditionError>;
}

impl IntoEdition for Edition {
    fn into_edition(self) -> Result<Edition, EditionError> {
        Ok(self)
    }
}

impl IntoEdition for &str {
    fn into_edition(self) -> Result<Edition, EditionError> {
        Edition::parse(self)
    }
}

impl IntoEdition for String {
    fn into_edition(self) -> Result<Edition, EditionError> {
        Edition::parse(&self)
    }
}

impl IntoEdition for &String {
    fn into_edition(self) -> Result<Edition, EditionError> {
        Edition::parse(self)
    }
}
