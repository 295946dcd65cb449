//! Pattern table
//!
//! The immutable configuration every resolution call reads: ordered
//! suffix→view mappings, exception-pattern→view mappings, view→status
//! overrides, defaults, and the model attribute name. Built once through
//! [`PatternTableBuilder`], never mutated afterwards, so concurrent
//! resolutions share it without locking.

pub mod config;

pub use config::{ExceptionMapping, ResolverConfig, StatusMapping, SuffixMapping};

use axum::http::StatusCode;

/// Model attribute the error message is stored under when none is configured.
pub const DEFAULT_EXCEPTION_ATTRIBUTE: &str = "exception";

/// Immutable resolution configuration.
///
/// Mapping order is declaration order and is significant: suffix matching is
/// last-match-wins, and exception-pattern ties at equal depth go to the first
/// declared pattern.
#[derive(Debug, Clone)]
pub struct PatternTable {
    suffix_mappings: Vec<(String, String)>,
    exception_mappings: Vec<(String, String)>,
    status_codes: Vec<(String, StatusCode)>,
    default_view: Option<String>,
    default_status: Option<StatusCode>,
    exception_attribute: Option<String>,
}

impl PatternTable {
    /// Start building a table.
    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder::new()
    }

    /// Configured (suffix, view) pairs in declaration order.
    pub fn suffix_mappings(&self) -> &[(String, String)] {
        &self.suffix_mappings
    }

    /// Configured (pattern, view) pairs in declaration order.
    pub fn exception_mappings(&self) -> &[(String, String)] {
        &self.exception_mappings
    }

    /// Explicit status override for a view, if one is configured.
    pub fn status_for(&self, view: &str) -> Option<StatusCode> {
        self.status_codes
            .iter()
            .find(|(mapped_view, _)| mapped_view == view)
            .map(|(_, status)| *status)
    }

    /// View used when neither suffix nor hierarchy matching decides.
    pub fn default_view(&self) -> Option<&str> {
        self.default_view.as_deref()
    }

    /// Status used when no explicit or async-style override applies.
    pub fn default_status(&self) -> Option<StatusCode> {
        self.default_status
    }

    /// Model attribute the message is exposed under. `None` disables all
    /// error content in resolved models.
    pub fn exception_attribute(&self) -> Option<&str> {
        self.exception_attribute.as_deref()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`PatternTable`].
///
/// The builder is the only way to construct a table; once built, the table
/// has no setters.
pub struct PatternTableBuilder {
    suffix_mappings: Vec<(String, String)>,
    exception_mappings: Vec<(String, String)>,
    status_codes: Vec<(String, StatusCode)>,
    default_view: Option<String>,
    default_status: Option<StatusCode>,
    exception_attribute: Option<String>,
}

impl PatternTableBuilder {
    /// Create a builder with the default exception attribute.
    pub fn new() -> Self {
        Self {
            suffix_mappings: Vec::new(),
            exception_mappings: Vec::new(),
            status_codes: Vec::new(),
            default_view: None,
            default_status: None,
            exception_attribute: Some(DEFAULT_EXCEPTION_ATTRIBUTE.to_string()),
        }
    }

    /// Map a path suffix to a view. Later declarations win when several
    /// suffixes match the same path.
    pub fn suffix(mut self, suffix: impl Into<String>, view: impl Into<String>) -> Self {
        self.suffix_mappings.push((suffix.into(), view.into()));
        self
    }

    /// Map an exception pattern to a view. Patterns match any lineage entry
    /// containing them as a substring; the closest match wins.
    pub fn exception(mut self, pattern: impl Into<String>, view: impl Into<String>) -> Self {
        self.exception_mappings.push((pattern.into(), view.into()));
        self
    }

    /// Pin an explicit status code to a view.
    pub fn status(mut self, view: impl Into<String>, status: StatusCode) -> Self {
        self.status_codes.push((view.into(), status));
        self
    }

    /// Set the fallback view used when nothing else matches.
    pub fn default_view(mut self, view: impl Into<String>) -> Self {
        self.default_view = Some(view.into());
        self
    }

    /// Set the fallback status code.
    pub fn default_status(mut self, status: StatusCode) -> Self {
        self.default_status = Some(status);
        self
    }

    /// Rename the model attribute the message is exposed under.
    pub fn exception_attribute(mut self, name: impl Into<String>) -> Self {
        self.exception_attribute = Some(name.into());
        self
    }

    /// Strip all error content from resolved models.
    pub fn without_exception_attribute(mut self) -> Self {
        self.exception_attribute = None;
        self
    }

    /// Build the immutable table.
    pub fn build(self) -> PatternTable {
        PatternTable {
            suffix_mappings: self.suffix_mappings,
            exception_mappings: self.exception_mappings,
            status_codes: self.status_codes,
            default_view: self.default_view,
            default_status: self.default_status,
            exception_attribute: self.exception_attribute,
        }
    }
}

impl Default for PatternTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
