/// Errors raised while turning an envelope into its wire map.
///
/// Building an envelope never fails; only serialization of caller-supplied
/// payloads can.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The payload or error detail could not be converted to a JSON value.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading [`EnvelopeConfig`](crate::config::EnvelopeConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}, expected one of: {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
