//! Error taxonomy for the command (encode) surface
//!
//! Decode is total and never produces an error. Everything in here concerns
//! writable entities: a value outside the declared domain means the host
//! offered the user something this layer cannot encode, which is a bug worth
//! surfacing rather than publishing a nonsensical payload.

use thiserror::Error;

/// Errors raised when turning a user-chosen value into an outbound payload.
#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    /// No descriptor is registered for this topic id
    #[error("No descriptor for topic id '{0}'")]
    UnknownTopic(String),

    /// The topic is modeled but read-only
    #[error("Topic '{0}' does not accept commands")]
    NotWritable(String),

    /// Select value outside the declared option list
    #[error("'{value}' is not an allowed option for '{topic_id}'")]
    InvalidOption { topic_id: String, value: String },

    /// Number value outside the declared bounds
    #[error("Value {value} for '{topic_id}' is outside [{min}, {max}]")]
    OutOfRange {
        topic_id: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The host-side publisher refused the outbound message
    #[error("Publish failed: {0}")]
    Publish(String),
}

pub type MappingResult<T> = Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MappingError::InvalidOption {
            topic_id: "SET9".to_string(),
            value: "Cool only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'Cool only' is not an allowed option for 'SET9'"
        );
    }
}
