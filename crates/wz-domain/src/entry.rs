//! Entry module - a single classification entry within one edition

/// Deepest hierarchy level (subclass)
pub const MAX_LEVEL: u8 = 5;

/// A classification entry as delivered by a data source
///
/// Entries are plain records; the hierarchy they describe is validated and
/// navigated by the store layer. Relations to other entries are expressed
/// only through codes, never through references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Code, unique within its edition (e.g. "A", "01", "01.1", "01.11", "01.11.0")
    pub code: String,

    /// German description of the classification
    pub title: String,

    /// Hierarchy level, 1 (section) through 5 (subclass)
    pub level: u8,

    /// Parent code; present iff `level > 1`
    pub parent_code: Option<String>,

    /// Codes of direct children; order carries no meaning
    pub child_codes: Vec<String>,
}

impl Entry {
    /// Create a top-level entry without parent or children
    pub fn new(code: impl Into<String>, title: impl Into<String>, level: u8) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            level,
            parent_code: None,
            child_codes: Vec::new(),
        }
    }

    /// Set the parent code
    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    /// Set the child codes
    pub fn with_children<I, S>(mut self, child_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.child_codes = child_codes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this entry sits at the top of the hierarchy
    pub fn is_top_level(&self) -> bool {
        self.level == 1
    }

    /// Whether this entry has any children
    pub fn has_children(&self) -> bool {
        !self.child_codes.is_empty()
    }
}
