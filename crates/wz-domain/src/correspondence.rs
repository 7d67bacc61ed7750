//! Correspondence module - links between entries of the two editions

use crate::Edition;
use std::fmt;

/// A documented link from a source entry to one counterpart in the other edition
///
/// The record describes the counterpart only: `version` names the
/// counterpart's edition, never the source's. Fields are private so a
/// correspondence cannot change after it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Correspondence {
    code: String,
    title: String,
    is_partial: bool,
    version: Edition,
}

impl Correspondence {
    /// Create a new correspondence
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        is_partial: bool,
        version: Edition,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            is_partial,
            version,
        }
    }

    /// Counterpart code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Counterpart title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// True if the two entries only overlap in scope
    pub fn is_partial(&self) -> bool {
        self.is_partial
    }

    /// Edition of the counterpart
    pub fn version(&self) -> Edition {
        self.version
    }

    /// "full" or "partial"
    pub fn match_kind(&self) -> &'static str {
        if self.is_partial {
            "partial"
        } else {
            "full"
        }
    }
}

impl fmt::Display for Correspondence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.code, self.title, self.match_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correspondence_creation() {
        let corr = Correspondence::new("01.11.0", "Test Title", false, Edition::Wz2008);

        assert_eq!(corr.code(), "01.11.0");
        assert_eq!(corr.title(), "Test Title");
        assert!(!corr.is_partial());
        assert_eq!(corr.version(), Edition::Wz2008);
    }

    #[test]
    fn test_display_names_match_kind() {
        let full = Correspondence::new("01.11.0", "Test Title", false, Edition::Wz2008);
        let partial = Correspondence::new("01.19.9", "Other Title", true, Edition::Wz2008);

        assert_eq!(full.to_string(), "01.11.0: Test Title (full)");
        assert_eq!(partial.to_string(), "01.19.9: Other Title (partial)");
    }

    #[test]
    fn test_debug_output() {
        let corr = Correspondence::new("01.11.0", "Test Title", true, Edition::Wz2008);
        let repr = format!("{:?}", corr);

        assert!(repr.contains("Correspondence"));
        assert!(repr.contains("01.11.0"));
        assert!(repr.contains("is_partial: true"));
        assert!(repr.contains("2008"));
    }
}
