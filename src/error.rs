use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading resolver configuration.
///
/// Resolution itself is total and never fails; every fallible check happens
/// here, at load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid status code {code} for view '{view}': must be in 100..=999")]
    InvalidStatusCode { view: String, code: u16 },

    #[error("Invalid default status code {code}: must be in 100..=999")]
    InvalidDefaultStatusCode { code: u16 },

    #[error("Suffix mapping for view '{view}' has an empty suffix")]
    EmptySuffix { view: String },

    #[error("Exception mapping for view '{view}' has an empty pattern")]
    EmptyPattern { view: String },
}

impl ConfigError {
    /// Create an invalid view status code error
    pub fn invalid_status_code(view: impl Into<String>, code: u16) -> Self {
        Self::InvalidStatusCode {
            view: view.into(),
            code,
        }
    }

    /// Create an invalid default status code error
    pub fn invalid_default_status_code(code: u16) -> Self {
        Self::InvalidDefaultStatusCode { code }
    }

    /// Create an empty suffix error
    pub fn empty_suffix(view: impl Into<String>) -> Self {
        Self::EmptySuffix { view: view.into() }
    }

    /// Create an empty pattern error
    pub fn empty_pattern(view: impl Into<String>) -> Self {
        Self::EmptyPattern { view: view.into() }
    }
}
