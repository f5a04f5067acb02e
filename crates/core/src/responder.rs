//! Configured envelope factory.
//!
//! [`Responder`] wraps the plain constructors with an [`EnvelopeConfig`]:
//! default messages come from the configured locale and
//! [`Responder::serialize`] applies the configured layout and presence
//! policy. Build one at startup and share it by reference; it holds no
//! mutable state.

use serde::Serialize;

use crate::config::EnvelopeConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::{ConfigError, EnvelopeError};
use crate::outcome::{DefaultMessage, ErrorKind};
use crate::types::{FieldErrors, ItemCount, PageNumber, WireMap};
use crate::wire::WireOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Responder {
    config: EnvelopeConfig,
}

impl Responder {
    pub fn new(config: EnvelopeConfig) -> Self {
        Self { config }
    }

    /// Build a responder from `ENVELOPE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        EnvelopeConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    fn message<'a>(&self, message: Option<&'a str>, which: DefaultMessage) -> &'a str {
        message.unwrap_or_else(|| self.config.locale.message(which))
    }

    pub fn ok<T, E>(&self, message: Option<&str>) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::ok(Some(self.message(message, DefaultMessage::Ok)))
    }

    pub fn ok_with_data<T, E>(
        &self,
        data: T,
        message: Option<&str>,
        code: Option<&str>,
    ) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::ok_with_data(data, Some(self.message(message, DefaultMessage::Ok)), code)
    }

    pub fn ok_paginated<T, E>(
        &self,
        data: T,
        total_items: ItemCount,
        current_page: PageNumber,
        page_size: ItemCount,
        message: Option<&str>,
        code: Option<&str>,
    ) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::ok_paginated(
            data,
            total_items,
            current_page,
            page_size,
            Some(self.message(message, DefaultMessage::Ok)),
            code,
        )
    }

    pub fn fail<T, E>(&self, message: impl Into<String>) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::fail(message)
    }

    pub fn fail_with_errors<T, E>(
        &self,
        message: impl Into<String>,
        errors: E,
    ) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::fail_with_errors(message, errors)
    }

    pub fn validation_error<T>(
        &self,
        message: impl Into<String>,
        field_errors: FieldErrors,
    ) -> ResponseEnvelope<T, FieldErrors> {
        ResponseEnvelope::validation_error(message, field_errors)
    }

    pub fn not_found<T, E>(&self, message: Option<&str>) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::not_found(Some(
            self.message(message, DefaultMessage::Failure(ErrorKind::NotFound)),
        ))
    }

    pub fn unauthorized<T, E>(&self, message: Option<&str>) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::unauthorized(Some(
            self.message(message, DefaultMessage::Failure(ErrorKind::Unauthorized)),
        ))
    }

    pub fn server_error<T, E>(&self, message: Option<&str>) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::server_error(Some(
            self.message(message, DefaultMessage::Failure(ErrorKind::ServerError)),
        ))
    }

    pub fn kind_error<T, E>(&self, kind: ErrorKind, message: Option<&str>) -> ResponseEnvelope<T, E> {
        ResponseEnvelope::kind_error(kind, Some(self.message(message, DefaultMessage::Failure(kind))))
    }

    /// Serialize with the configured layout and presence policy.
    pub fn serialize<T: Serialize, E: Serialize>(
        &self,
        envelope: &ResponseEnvelope<T, E>,
    ) -> Result<WireMap, EnvelopeError> {
        envelope.to_map_with(WireOptions::from(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::config::{Layout, PresencePolicy};
    use crate::outcome::Locale;

    type Envelope = ResponseEnvelope<Value>;

    fn spanish() -> Responder {
        Responder::new(EnvelopeConfig {
            locale: Locale::Es,
            ..EnvelopeConfig::default()
        })
    }

    #[test]
    fn default_responder_matches_plain_constructors() {
        let responder = Responder::default();
        let configured: Envelope = responder.not_found(None);
        assert_eq!(configured, Envelope::not_found(None));

        let configured: Envelope = responder.ok_with_data(json!(1), None, Some("C"));
        assert_eq!(configured, Envelope::ok_with_data(json!(1), None, Some("C")));
    }

    #[test]
    fn locale_supplies_default_messages() {
        let responder = spanish();
        let ok: Envelope = responder.ok(None);
        assert_eq!(ok.message(), "Operación exitosa");

        let missing: Envelope = responder.not_found(None);
        assert_eq!(missing.message(), "Recurso no encontrado");

        let denied: Envelope = responder.unauthorized(None);
        assert_eq!(denied.message(), "No autorizado");

        let crashed: Envelope = responder.server_error(None);
        assert_eq!(crashed.message(), "Error interno del servidor");
    }

    #[test]
    fn explicit_message_wins_over_locale() {
        let responder = spanish();
        let envelope: Envelope = responder.ok_paginated(json!([]), 10, 1, 5, Some("Usuarios obtenidos"), None);
        assert_eq!(envelope.message(), "Usuarios obtenidos");
        assert_eq!(envelope.pagination().map(|p| p.total_pages), Some(2));
    }

    #[test]
    fn kind_error_uses_locale_message_and_code() {
        let envelope: Envelope = spanish().kind_error(ErrorKind::Unauthorized, None);
        assert_eq!(envelope.message(), "No autorizado");
        assert_eq!(envelope.code(), Some("UNAUTHORIZED"));
    }

    #[test]
    fn failure_constructors_pass_through() {
        let responder = Responder::default();
        let failed: Envelope = responder.fail("generic error");
        assert_eq!(failed, Envelope::fail("generic error"));

        let detailed: Envelope = responder.fail_with_errors("boom", json!({ "at": "step 2" }));
        assert_eq!(detailed.errors(), Some(&json!({ "at": "step 2" })));

        let mut fields = FieldErrors::new();
        fields.insert("name".into(), vec!["required".into()]);
        let invalid: ResponseEnvelope<(), FieldErrors> =
            responder.validation_error("Form errors", fields.clone());
        assert_eq!(invalid.errors(), Some(&fields));
    }

    #[test]
    fn serialize_applies_configured_shape() {
        let responder = Responder::new(EnvelopeConfig {
            locale: Locale::En,
            presence: PresencePolicy::Falsy,
            layout: Layout::Flat,
        });
        let envelope: Envelope = responder.ok_paginated(json!([]), 30, 2, 10, None, None);
        let map = responder.serialize(&envelope).unwrap();

        assert_eq!(
            Value::Object(map),
            json!({
                "success": true,
                "message": "operation succeeded",
                "totalRows": 30,
                "currentPage": 2,
                "totalPages": 3,
                "pageSize": 10,
            })
        );
    }
}
