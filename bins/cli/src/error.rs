use restkit_domain::EnumError;
use restkit_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    InvalidInput = 2,
    Io = 3,
    Internal = 1,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Debug)]
pub enum CliError {
    Codec(EnumError),
    Config(ErrorEnvelope),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Codec(_) | Self::Config(_) => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::Io,
            Self::Serialization(_) => ExitCode::Internal,
        }
    }

    /// Structured form used for JSON error output.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Codec(error) => error.clone().into_request_error(),
            Self::Config(envelope) => envelope.clone(),
            Self::Io(error) => {
                ErrorEnvelope::from(std::io::Error::new(error.kind(), error.to_string()))
            },
            Self::Serialization(error) => ErrorEnvelope::unexpected(
                ErrorCode::internal(),
                error.to_string(),
                ErrorClass::NonRetriable,
            ),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(error) => write!(formatter, "invalid input: {error}"),
            Self::Config(envelope) => write!(formatter, "config error: {}", envelope.message),
            Self::Io(error) => write!(formatter, "io error: {error}"),
            Self::Serialization(error) => write!(formatter, "serialization error: {error}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<EnumError> for CliError {
    fn from(error: EnumError) -> Self {
        Self::Codec(error)
    }
}

impl From<ErrorEnvelope> for CliError {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self::Config(envelope)
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}
