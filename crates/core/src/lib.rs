//! Uniform response envelopes for API services.
//!
//! Every endpoint returns a [`ResponseEnvelope`]: a success flag, a message,
//! and optional code, payload, error detail and pagination block. Envelopes
//! are built by named constructors and turned into an ordered wire map that
//! omits fields carrying no information. Transport binding (status codes,
//! routing, encoding) is left to the caller.

pub mod config;
pub mod envelope;
pub mod error;
pub mod outcome;
pub mod pagination;
pub mod responder;
pub mod types;
pub mod validation;
pub mod wire;

pub use config::{EnvelopeConfig, Layout, PresencePolicy};
pub use envelope::ResponseEnvelope;
pub use error::{ConfigError, EnvelopeError};
pub use outcome::{ErrorKind, Locale};
pub use pagination::{derive_pagination, PageRequest, PaginationBlock};
pub use responder::Responder;
pub use types::{FieldErrors, WireMap};
pub use wire::WireOptions;
