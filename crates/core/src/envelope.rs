//! The response envelope and its named constructors.
//!
//! Every endpoint returns the same shape: an outcome flag, a human message,
//! and whatever optional parts apply. Envelopes are built once by one of the
//! constructors below and only read afterwards; the fields are private so the
//! presence rules applied at construction (empty codes dropped, derived
//! pagination) cannot be bypassed.

use std::fmt;

use crate::outcome::{DefaultMessage, ErrorKind, Locale};
use crate::pagination::{derive_pagination, PaginationBlock};
use crate::types::{FieldErrors, ItemCount, PageNumber};

/// Uniform response container.
///
/// `T` is the payload type, `E` the error detail type. Both `data` and
/// `errors` may be set at once; nothing rejects that combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T = (), E = serde_json::Value> {
    success: bool,
    message: String,
    code: Option<String>,
    data: Option<T>,
    errors: Option<E>,
    pagination: Option<PaginationBlock>,
}

/// Keep a code only when it carries text.
fn non_empty(code: Option<&str>) -> Option<String> {
    code.filter(|c| !c.is_empty()).map(str::to_owned)
}

fn message_or(message: Option<&str>, which: DefaultMessage) -> String {
    message
        .unwrap_or_else(|| Locale::En.message(which))
        .to_owned()
}

impl<T, E> ResponseEnvelope<T, E> {
    fn bare(success: bool, message: String) -> Self {
        Self {
            success,
            message,
            code: None,
            data: None,
            errors: None,
            pagination: None,
        }
    }

    // -- success ------------------------------------------------------------

    /// Success without a payload. Message defaults to `"operation succeeded"`.
    ///
    /// ```
    /// use envelope_core::ResponseEnvelope;
    /// let response: ResponseEnvelope = ResponseEnvelope::ok(None);
    /// assert!(response.success());
    /// assert_eq!(response.message(), "operation succeeded");
    /// ```
    pub fn ok(message: Option<&str>) -> Self {
        Self::bare(true, message_or(message, DefaultMessage::Ok))
    }

    /// Success carrying a payload. An empty `code` is dropped.
    ///
    /// ```
    /// use envelope_core::ResponseEnvelope;
    /// let response: ResponseEnvelope<Vec<u32>> =
    ///     ResponseEnvelope::ok_with_data(vec![1, 2], Some("Usuarios obtenidos"), Some(""));
    /// assert_eq!(response.data(), Some(&vec![1, 2]));
    /// assert_eq!(response.code(), None);
    /// ```
    pub fn ok_with_data(data: T, message: Option<&str>, code: Option<&str>) -> Self {
        Self {
            code: non_empty(code),
            data: Some(data),
            ..Self::bare(true, message_or(message, DefaultMessage::Ok))
        }
    }

    /// Success carrying one page of a collection plus its pagination block.
    ///
    /// ```
    /// use envelope_core::ResponseEnvelope;
    /// let response: ResponseEnvelope<Vec<u32>> =
    ///     ResponseEnvelope::ok_paginated(vec![4, 5, 6], 50, 2, 3, None, None);
    /// let page = response.pagination().unwrap();
    /// assert_eq!(page.total_pages, 17);
    /// assert!(page.has_previous && page.has_next);
    /// ```
    pub fn ok_paginated(
        data: T,
        total_items: ItemCount,
        current_page: PageNumber,
        page_size: ItemCount,
        message: Option<&str>,
        code: Option<&str>,
    ) -> Self {
        Self {
            pagination: Some(derive_pagination(total_items, current_page, page_size)),
            ..Self::ok_with_data(data, message, code)
        }
    }

    // -- failure ------------------------------------------------------------

    /// Generic failure with only a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::bare(false, message.into())
    }

    /// Failure with structured error detail.
    pub fn fail_with_errors(message: impl Into<String>, errors: E) -> Self {
        Self::failure(message, None, None, Some(errors))
    }

    /// Failure with every optional part spelled out. The other failure
    /// constructors are shorthands for this one.
    pub fn failure(
        message: impl Into<String>,
        code: Option<&str>,
        data: Option<T>,
        errors: Option<E>,
    ) -> Self {
        Self {
            code: non_empty(code),
            data,
            errors,
            ..Self::fail(message)
        }
    }

    /// Failure tagged with a machine code. An empty code is dropped.
    pub fn error(message: impl Into<String>, code: &str) -> Self {
        Self::failure(message, Some(code), None, None)
    }

    /// Failure that still carries a payload, e.g. the partially processed input.
    pub fn error_with_data(data: Option<T>, message: impl Into<String>, code: &str) -> Self {
        Self::failure(message, Some(code), data, None)
    }

    /// Coded failure for a canonical kind, using the kind's default message
    /// when none is given.
    pub fn kind_error(kind: ErrorKind, message: Option<&str>) -> Self {
        Self::error(message_or(message, DefaultMessage::Failure(kind)), kind.code())
    }

    /// Message defaults to `"resource not found"`.
    pub fn not_found(message: Option<&str>) -> Self {
        Self::fail(message_or(
            message,
            DefaultMessage::Failure(ErrorKind::NotFound),
        ))
    }

    /// Message defaults to `"unauthorized"`.
    pub fn unauthorized(message: Option<&str>) -> Self {
        Self::fail(message_or(
            message,
            DefaultMessage::Failure(ErrorKind::Unauthorized),
        ))
    }

    /// Message defaults to `"internal server error"`.
    pub fn server_error(message: Option<&str>) -> Self {
        Self::fail(message_or(
            message,
            DefaultMessage::Failure(ErrorKind::ServerError),
        ))
    }

    // -- accessors ----------------------------------------------------------

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> Option<&E> {
        self.errors.as_ref()
    }

    pub fn pagination(&self) -> Option<&PaginationBlock> {
        self.pagination.as_ref()
    }

    /// Take the payload, discarding the rest of the envelope.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert the error detail into another type, keeping everything else.
    pub fn map_errors<F, E2>(self, f: F) -> ResponseEnvelope<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        ResponseEnvelope {
            success: self.success,
            message: self.message,
            code: self.code,
            data: self.data,
            errors: self.errors.map(f),
            pagination: self.pagination,
        }
    }
}

impl<T> ResponseEnvelope<T, FieldErrors> {
    /// Failure listing violation messages per field, in the order given.
    pub fn validation_error(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self::fail_with_errors(message, field_errors)
    }

    /// Validation failure built from `validator` output.
    pub fn validation_error_from(
        message: impl Into<String>,
        errors: &validator::ValidationErrors,
    ) -> Self {
        Self::validation_error(message, crate::validation::field_errors(errors))
    }
}

impl<T, E> fmt::Display for ResponseEnvelope<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResponseEnvelope {{ success: {}, message: {:?}, code: {:?} }}",
            self.success, self.message, self.code
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
