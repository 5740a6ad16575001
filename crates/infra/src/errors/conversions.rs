//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use dashlens_domain::DashLensError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DashLensError);

impl From<InfraError> for DashLensError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DashLensError> for InfraError {
    fn from(value: DashLensError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDashLensError {
    fn into_dashlens(self) -> DashLensError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DashLensError */
/* -------------------------------------------------------------------------- */

impl IntoDashLensError for HttpError {
    fn into_dashlens(self) -> DashLensError {
        if self.is_timeout() {
            return DashLensError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DashLensError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return DashLensError::Parse(format!("HTTP response body is malformed: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => DashLensError::NotFound(message),
                429 => DashLensError::Network(message),
                400..=499 => DashLensError::InvalidInput(message),
                _ => DashLensError::Network(message),
            };
        }

        DashLensError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_dashlens())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → DashLensError */
/* -------------------------------------------------------------------------- */

impl IntoDashLensError for JsonError {
    fn into_dashlens(self) -> DashLensError {
        if self.is_io() {
            return DashLensError::Internal(format!("I/O failure while reading JSON: {self}"));
        }
        DashLensError::Parse(format!("invalid JSON at line {}: {self}", self.line()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_dashlens())
    }
}

impl IntoDashLensError for TomlError {
    fn into_dashlens(self) -> DashLensError {
        DashLensError::Parse(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_dashlens())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → DashLensError */
/* -------------------------------------------------------------------------- */

impl IntoDashLensError for IoError {
    fn into_dashlens(self) -> DashLensError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => DashLensError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                DashLensError::InvalidInput(format!("permission denied: {self}"))
            }
            _ => DashLensError::Internal(format!("I/O error: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_dashlens())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
