use indexmap::IndexMap;

/// Item counts and page sizes are never negative.
pub type ItemCount = u64;

/// Page numbers are 1-based but accepted as given, so they may be zero or negative.
pub type PageNumber = i64;

/// Field name to ordered violation messages, in insertion order.
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Ordered string-keyed wire representation of an envelope.
pub type WireMap = serde_json::Map<String, serde_json::Value>;
