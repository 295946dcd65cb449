//! Raw resolver configuration
//!
//! The serde-facing shape of the pattern table. The lists keep declaration
//! order, which the matchers rely on for tie-breaking. [`ResolverConfig`] is
//! format-agnostic: feed it TOML, JSON, or whatever serde format the hosting
//! application loads.
//!
//! All validation happens in [`ResolverConfig::into_table`], so a malformed
//! table fails at load time instead of during request handling.

use axum::http::StatusCode;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::table::PatternTable;

/// One suffix→view entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SuffixMapping {
    pub suffix: String,
    pub view: String,
}

/// One exception-pattern→view entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ExceptionMapping {
    pub pattern: String,
    pub view: String,
}

/// One view→status entry. The status is validated when the table is built.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMapping {
    pub view: String,
    pub status: u16,
}

/// Deserializable resolver configuration.
///
/// `exception_attribute` follows the original setter contract: absent keeps
/// the default `"exception"`, an empty string disables error content in
/// resolved models.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub suffix_mappings: Vec<SuffixMapping>,
    pub exception_mappings: Vec<ExceptionMapping>,
    pub status_codes: Vec<StatusMapping>,
    pub default_error_view: Option<String>,
    pub default_status_code: Option<u16>,
    pub exception_attribute: Option<String>,
}

impl ResolverConfig {
    /// Validate the raw configuration and build the immutable table.
    pub fn into_table(self) -> Result<PatternTable> {
        let mut builder = PatternTable::builder();

        for mapping in self.suffix_mappings {
            if mapping.suffix.is_empty() {
                return Err(ConfigError::empty_suffix(mapping.view));
            }
            builder = builder.suffix(mapping.suffix, mapping.view);
        }

        for mapping in self.exception_mappings {
            if mapping.pattern.is_empty() {
                return Err(ConfigError::empty_pattern(mapping.view));
            }
            builder = builder.exception(mapping.pattern, mapping.view);
        }

        for mapping in self.status_codes {
            let status = StatusCode::from_u16(mapping.status)
                .map_err(|_| ConfigError::invalid_status_code(&mapping.view, mapping.status))?;
            builder = builder.status(mapping.view, status);
        }

        if let Some(view) = self.default_error_view {
            builder = builder.default_view(view);
        }

        if let Some(code) = self.default_status_code {
            let status = StatusCode::from_u16(code)
                .map_err(|_| ConfigError::invalid_default_status_code(code))?;
            builder = builder.default_status(status);
        }

        builder = match self.exception_attribute {
            Some(attribute) if attribute.is_empty() => builder.without_exception_attribute(),
            Some(attribute) => builder.exception_attribute(attribute),
            None => builder,
        };

        Ok(builder.build())
    }
}
