//! Localized message lookup
//!
//! Faults carrying a business error code get their message re-derived from a
//! catalog before matching, so the rendered view shows the localized text
//! while code and lineage stay untouched. Matching itself never consults the
//! catalog; this is caller-side preprocessing wired into the web filter.

use std::sync::Arc;

use dashmap::DashMap;

/// Locale assumed when a request carries no usable language preference.
pub const DEFAULT_LOCALE: &str = "en";

/// Source of localized message templates, keyed by business error code.
pub trait MessageLookup: Send + Sync {
    /// The message for `code` in `locale`, with `params` interpolated.
    /// `None` when the catalog has no entry for the code.
    fn message(&self, code: &str, params: &[String], locale: &str) -> Option<String>;
}

/// In-memory message catalog with `{0}`-style positional parameters.
///
/// Entries registered without a locale act as the fallback for every locale.
#[derive(Clone, Default)]
pub struct StaticMessages {
    localized: Arc<DashMap<(String, String), String>>,
    fallback: Arc<DashMap<String, String>>,
}

impl StaticMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locale-independent template for a code.
    pub fn insert(&self, code: impl Into<String>, template: impl Into<String>) {
        self.fallback.insert(code.into(), template.into());
    }

    /// Register a template for a code in one specific locale.
    pub fn insert_localized(
        &self,
        locale: impl Into<String>,
        code: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.localized
            .insert((locale.into(), code.into()), template.into());
    }
}

impl MessageLookup for StaticMessages {
    fn message(&self, code: &str, params: &[String], locale: &str) -> Option<String> {
        let template = self
            .localized
            .get(&(locale.to_string(), code.to_string()))
            .map(|entry| entry.value().clone())
            .or_else(|| self.fallback.get(code).map(|entry| entry.value().clone()))?;

        Some(interpolate(&template, params))
    }
}

/// Replace `{0}`, `{1}`, ... with the corresponding parameter.
fn interpolate(template: &str, params: &[String]) -> String {
    let mut message = template.to_string();
    for (index, param) in params.iter().enumerate() {
        message = message.replace(&format!("{{{}}}", index), param);
    }
    message
}
