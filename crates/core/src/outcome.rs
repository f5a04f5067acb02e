//! Outcome taxonomy and default messages.
//!
//! Failures are values, not exceptions: an [`ErrorKind`] only supplies the
//! conventional machine code and default message for a failed envelope. The
//! core does not check that callers pick the right kind.

use serde::{Deserialize, Serialize};

/// Canonical failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unauthorized,
    ServerError,
    Generic,
}

impl ErrorKind {
    /// Conventional machine-readable code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::ServerError => "INTERNAL_ERROR",
            ErrorKind::Generic => "ERROR",
        }
    }
}

/// Language used for default messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Which default message to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultMessage {
    Ok,
    Failure(ErrorKind),
}

impl Locale {
    /// Default message for an outcome in this locale.
    pub fn message(self, which: DefaultMessage) -> &'static str {
        use DefaultMessage as M;
        use ErrorKind as K;

        match (self, which) {
            (Locale::En, M::Ok) => "operation succeeded",
            (Locale::En, M::Failure(K::Validation)) => "validation failed",
            (Locale::En, M::Failure(K::NotFound)) => "resource not found",
            (Locale::En, M::Failure(K::Unauthorized)) => "unauthorized",
            (Locale::En, M::Failure(K::ServerError)) => "internal server error",
            (Locale::En, M::Failure(K::Generic)) => "operation failed",

            (Locale::Es, M::Ok) => "Operación exitosa",
            (Locale::Es, M::Failure(K::Validation)) => "Error de validación",
            (Locale::Es, M::Failure(K::NotFound)) => "Recurso no encontrado",
            (Locale::Es, M::Failure(K::Unauthorized)) => "No autorizado",
            (Locale::Es, M::Failure(K::ServerError)) => "Error interno del servidor",
            (Locale::Es, M::Failure(K::Generic)) => "Error en la operación",
        }
    }
}
