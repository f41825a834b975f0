use sevlog_core_types::ParseSeverityError;
use thiserror::Error;

/// Result type alias using SevlogError
pub type Result<T> = std::result::Result<T, SevlogError>;

/// Canonical error kind taxonomy
///
/// Emission never fails, so every kind here belongs to configuration or
/// initialization. Each kind maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SevlogErrorKind {
    UnknownSeverity,
    InvalidConfig,
    AlreadyInitialized,
}

impl SevlogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SevlogErrorKind::UnknownSeverity => "ERR_UNKNOWN_SEVERITY",
            SevlogErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            SevlogErrorKind::AlreadyInitialized => "ERR_ALREADY_INITIALIZED",
        }
    }
}

/// Errors raised while configuring or installing a logger
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SevlogError {
    /// A severity name matched none of the predefined levels
    #[error("Unknown severity: {name}")]
    UnknownSeverity { name: String },

    /// A configuration value could not be interpreted
    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// The process-wide logger was already installed
    #[error("Global logger is already initialized")]
    AlreadyInitialized,
}

impl SevlogError {
    /// Get the error kind
    pub fn kind(&self) -> SevlogErrorKind {
        match self {
            SevlogError::UnknownSeverity { .. } => SevlogErrorKind::UnknownSeverity,
            SevlogError::InvalidConfig { .. } => SevlogErrorKind::InvalidConfig,
            SevlogError::AlreadyInitialized => SevlogErrorKind::AlreadyInitialized,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<ParseSeverityError> for SevlogError {
    fn from(err: ParseSeverityError) -> Self {
        SevlogError::UnknownSeverity { name: err.name }
    }
}
