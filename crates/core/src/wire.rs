//! Wire representation of an envelope.
//!
//! Serialization walks an explicit, ordered list of fields, each paired with
//! its presence predicate. `success` is always emitted; every other field
//! only when it carries information. Absent fields are left out entirely,
//! never written as `null`.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::config::{EnvelopeConfig, Layout, PresencePolicy};
use crate::envelope::ResponseEnvelope;
use crate::error::EnvelopeError;
use crate::types::WireMap;

/// Shape options for [`ResponseEnvelope::to_map_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireOptions {
    pub presence: PresencePolicy,
    pub layout: Layout,
}

impl From<&EnvelopeConfig> for WireOptions {
    fn from(config: &EnvelopeConfig) -> Self {
        Self {
            presence: config.presence,
            layout: config.layout,
        }
    }
}

/// One candidate wire field and whether it should be emitted.
struct WireField {
    name: &'static str,
    value: Value,
    present: bool,
}

impl WireField {
    fn new(name: &'static str, value: Value, present: bool) -> Self {
        Self {
            name,
            value,
            present,
        }
    }

    fn text(name: &'static str, text: Option<&str>) -> Self {
        let text = text.unwrap_or_default();
        Self::new(name, Value::from(text), !text.is_empty())
    }

    fn count<N: Into<Value> + Default + PartialEq>(name: &'static str, number: Option<N>) -> Self {
        let number = number.unwrap_or_default();
        let present = number != N::default();
        Self::new(name, number.into(), present)
    }

    fn payload<P: Serialize>(
        name: &'static str,
        payload: Option<&P>,
        policy: PresencePolicy,
    ) -> Result<Self, EnvelopeError> {
        let value = match payload {
            Some(payload) => serde_json::to_value(payload)?,
            None => Value::Null,
        };
        let present = match policy {
            PresencePolicy::NullOnly => !value.is_null(),
            PresencePolicy::Falsy => is_truthy(&value),
        };
        Ok(Self::new(name, value, present))
    }
}

/// Whether a value survives the falsy presence policy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

impl<T: Serialize, E: Serialize> ResponseEnvelope<T, E> {
    /// Convert to the default wire map: nested pagination, null-only presence.
    pub fn to_map(&self) -> Result<WireMap, EnvelopeError> {
        self.to_map_with(WireOptions::default())
    }

    /// Convert to a wire map with explicit shape options.
    pub fn to_map_with(&self, options: WireOptions) -> Result<WireMap, EnvelopeError> {
        let mut map = WireMap::new();
        for field in self.wire_fields(options)? {
            if field.present {
                map.insert(field.name.to_owned(), field.value);
            } else {
                tracing::trace!(field = field.name, "Omitting empty envelope field");
            }
        }
        Ok(map)
    }

    fn wire_fields(&self, options: WireOptions) -> Result<Vec<WireField>, EnvelopeError> {
        let mut fields = vec![
            WireField::new("success", Value::Bool(self.success()), true),
            WireField::text("message", Some(self.message())),
            WireField::text("code", self.code()),
            WireField::payload("data", self.data(), options.presence)?,
            WireField::payload("errors", self.errors(), options.presence)?,
        ];

        let pagination = self.pagination();
        match options.layout {
            Layout::Nested => {
                fields.push(WireField::payload(
                    "pagination",
                    pagination,
                    PresencePolicy::NullOnly,
                )?);
            }
            Layout::Flat => {
                fields.extend([
                    WireField::count("totalRows", pagination.map(|p| p.total_items)),
                    WireField::count("currentPage", pagination.map(|p| p.current_page)),
                    WireField::count("totalPages", pagination.map(|p| p.total_pages)),
                    WireField::count("pageSize", pagination.map(|p| p.page_size)),
                ]);
            }
        }

        Ok(fields)
    }
}

impl<T: Serialize, E: Serialize> Serialize for ResponseEnvelope<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map = self
            .to_map()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        map.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::types::FieldErrors;

    type Envelope = ResponseEnvelope<Value>;

    fn keys(map: &WireMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    const FALSY: WireOptions = WireOptions {
        presence: PresencePolicy::Falsy,
        layout: Layout::Nested,
    };

    const FLAT: WireOptions = WireOptions {
        presence: PresencePolicy::NullOnly,
        layout: Layout::Flat,
    };

    // -- presence -------------------------------------------------------------

    #[test]
    fn success_is_always_emitted() {
        let map = Envelope::fail("").to_map().unwrap();
        assert_eq!(keys(&map), ["success"]);
        assert_eq!(map["success"], json!(false));
    }

    #[test]
    fn fields_follow_declared_order() {
        let paged = Envelope::ok_paginated(json!([1]), 1, 1, 1, Some("m"), Some("C"));
        let map = paged.to_map().unwrap();
        assert_eq!(keys(&map), ["success", "message", "code", "data", "pagination"]);

        let failed = Envelope::failure("m", Some("C"), Some(json!(1)), Some(json!({ "e": 1 })));
        let map = failed.to_map().unwrap();
        assert_eq!(keys(&map), ["success", "message", "code", "data", "errors"]);
    }

    #[test]
    fn data_and_errors_may_coexist() {
        let envelope = Envelope::failure(
            "partial import",
            None,
            Some(json!({ "imported": 3 })),
            Some(json!({ "row 4": ["missing name"] })),
        );
        let map = envelope.to_map().unwrap();
        assert_eq!(map["data"], json!({ "imported": 3 }));
        assert_eq!(map["errors"], json!({ "row 4": ["missing name"] }));
    }

    #[test]
    fn null_payload_is_never_emitted() {
        let envelope = Envelope::ok_with_data(Value::Null, Some("m"), None);
        let map = envelope.to_map().unwrap();
        assert!(!map.contains_key("data"));
    }

    #[test]
    fn null_only_keeps_empty_and_zero_payloads() {
        let empty_list = Envelope::ok_with_data(json!([]), None, None).to_map().unwrap();
        assert_eq!(empty_list["data"], json!([]));

        let zero = Envelope::ok_with_data(json!(0), None, None).to_map().unwrap();
        assert_eq!(zero["data"], json!(0));
    }

    #[test]
    fn falsy_drops_empty_and_zero_payloads() {
        for payload in [json!([]), json!({}), json!(0), json!(""), json!(false)] {
            let map = Envelope::ok_with_data(payload, None, None)
                .to_map_with(FALSY)
                .unwrap();
            assert!(!map.contains_key("data"));
        }

        let map = Envelope::ok_with_data(json!([0]), None, None)
            .to_map_with(FALSY)
            .unwrap();
        assert_eq!(map["data"], json!([0]));
    }

    #[test]
    fn falsy_drops_empty_error_detail() {
        let envelope: ResponseEnvelope<(), FieldErrors> =
            ResponseEnvelope::validation_error("Form errors", FieldErrors::new());
        assert!(envelope.to_map().unwrap().contains_key("errors"));
        assert!(!envelope.to_map_with(FALSY).unwrap().contains_key("errors"));
    }

    // -- layouts --------------------------------------------------------------

    #[test]
    fn nested_layout_emits_whole_block() {
        let map = Envelope::ok_paginated(json!([]), 100, 1, 10, None, None)
            .to_map()
            .unwrap();
        assert_eq!(
            map["pagination"],
            json!({
                "totalItems": 100,
                "currentPage": 1,
                "pageSize": 10,
                "totalPages": 10,
                "hasPrevious": false,
                "hasNext": true,
            })
        );
    }

    #[test]
    fn flat_layout_hoists_counts() {
        let map = Envelope::ok_paginated(json!([1, 2]), 100, 1, 10, Some("Usuarios obtenidos"), None)
            .to_map_with(FLAT)
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(map),
            json!({
                "success": true,
                "message": "Usuarios obtenidos",
                "data": [1, 2],
                "totalRows": 100,
                "currentPage": 1,
                "totalPages": 10,
                "pageSize": 10,
            })
        );
    }

    #[test]
    fn flat_layout_omits_zero_counts() {
        let map = Envelope::ok_paginated(json!([]), 0, 1, 0, None, None)
            .to_map_with(FLAT)
            .unwrap();
        assert_eq!(keys(&map), ["success", "message", "data", "currentPage"]);
    }

    #[test]
    fn flat_layout_without_pagination_adds_nothing() {
        let map = Envelope::ok(None).to_map_with(FLAT).unwrap();
        assert_eq!(keys(&map), ["success", "message"]);
    }

    // -- serde integration ----------------------------------------------------

    #[test]
    fn serialize_matches_to_map() {
        let envelope = Envelope::ok_with_data(json!({ "id": 1 }), Some("m"), Some("C"));
        let via_serde = serde_json::to_value(&envelope).unwrap();
        let via_map = Value::Object(envelope.to_map().unwrap());
        assert_eq!(via_serde, via_map);
    }

    #[test]
    fn serializing_twice_is_identical() {
        let envelope = Envelope::ok_paginated(json!([1, 2, 3]), 50, 2, 3, None, Some("PAGE"));
        let first = serde_json::to_string(&envelope).unwrap();
        let second = serde_json::to_string(&envelope).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unserializable_payload_is_reported() {
        let mut payload = HashMap::new();
        payload.insert((1, 2), "tuple keys are not JSON object keys");
        let envelope: ResponseEnvelope<HashMap<(i32, i32), &str>> =
            ResponseEnvelope::ok_with_data(payload, None, None);

        assert_matches!(envelope.to_map(), Err(EnvelopeError::Serialization(_)));
        assert!(serde_json::to_string(&envelope).is_err());
    }
}
