//! JSON adapter for request and response bodies.
//!
//! JSON payloads follow one convention in both directions: object keys
//! are `snake_case` (the natural spelling of Rust field names; enums with
//! multi-word variants use `#[serde(rename_all = "snake_case")]`), and
//! timestamps are seconds since the Unix epoch via [`epoch_seconds`].
//!
//! # Example
//!
//! ```
//! use std::time::SystemTime;
//! use serde::{Deserialize, Serialize};
//! use typed_http::body::{JsonDecodableBody, JsonEncodableBody, epoch_seconds};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Session {
//!     access_token: String,
//!     #[serde(with = "epoch_seconds")]
//!     expires_at: SystemTime,
//! }
//!
//! impl JsonEncodableBody for Session {}
//! impl JsonDecodableBody for Session {}
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::transport::{HttpRequest, ResponseMetadata};

use super::{CodecError, DecodableBody, EncodableBody};

/// MIME type written by JSON bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// A request payload sent as JSON.
///
/// Implementing this marker (usually with an empty `impl` block) makes the
/// type an [`EncodableBody`] that writes `Content-Type: application/json`.
pub trait JsonEncodableBody: Serialize + Send + Sync {
    /// Serializes the payload.
    ///
    /// Override to customize the output, for example to pretty-print.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] if serialization fails.
    fn to_json(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// A response payload parsed from JSON.
///
/// Implementing this marker makes the type a [`DecodableBody`]. The
/// response metadata is ignored unless [`from_json`](Self::from_json) is
/// overridden.
pub trait JsonDecodableBody: DeserializeOwned + Send {
    /// Parses the payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] if the body is not valid JSON for `Self`.
    fn from_json(data: &[u8], _response: &ResponseMetadata) -> Result<Self, CodecError> {
        Ok(serde_json::from_slice(data)?)
    }
}

impl<T: JsonEncodableBody> EncodableBody for T {
    fn encode(&self, request: &mut HttpRequest) -> Result<(), CodecError> {
        request.body = Some(self.to_json()?);
        request.set_content_type(http::HeaderValue::from_static(APPLICATION_JSON));
        Ok(())
    }
}

impl<T: JsonDecodableBody> DecodableBody for T {
    fn decode(data: &[u8], response: &ResponseMetadata) -> Result<Self, CodecError> {
        Self::from_json(data, response)
    }
}

impl<T: JsonEncodableBody> JsonEncodableBody for Vec<T> {}

impl<T: JsonDecodableBody> JsonDecodableBody for Vec<T> {}

/// Serde helpers encoding [`SystemTime`](std::time::SystemTime) as seconds
/// since the Unix epoch.
///
/// Whole seconds are written as integers, anything finer as a float.
/// Decoding accepts either. Use with `#[serde(with = "epoch_seconds")]`,
/// or `epoch_seconds::option` for `Option<SystemTime>`.
///
/// Sub-second parts are kept to the microsecond: nanoseconds are rounded
/// on encode, and the fraction is rounded back to the same microsecond on
/// decode. Values written by `serialize` decode to an equal `SystemTime`
/// for any time within about 2^32 seconds of the epoch.
pub mod epoch_seconds {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// First magnitude whose whole seconds no longer fit in an `i64`.
    const MAX_SECS: f64 = 9_223_372_036_854_775_808.0;

    /// Serializes a timestamp as epoch seconds.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let (offset, before_epoch) = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => (round_to_micros(after), false),
            Err(before) => (round_to_micros(before.duration()), true),
        };

        if offset.subsec_nanos() != 0 {
            let secs = offset.as_secs_f64();
            return serializer.serialize_f64(if before_epoch { -secs } else { secs });
        }

        if !before_epoch {
            return serializer.serialize_u64(offset.as_secs());
        }
        match i64::try_from(offset.as_secs()) {
            Ok(secs) => serializer.serialize_i64(-secs),
            Err(_) => serializer.serialize_f64(-offset.as_secs_f64()),
        }
    }

    /// Deserializes epoch seconds into a timestamp.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a number or lies outside the range
    /// representable by [`SystemTime`].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        from_secs(secs).ok_or_else(|| D::Error::custom(format!("timestamp out of range: {secs}")))
    }

    fn round_to_micros(duration: Duration) -> Duration {
        let micros = (duration.subsec_nanos() + 500) / 1_000;
        Duration::from_secs(duration.as_secs())
            .saturating_add(Duration::from_micros(u64::from(micros)))
    }

    // Both casts are lossless once the range check passes.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_secs(secs: f64) -> Option<SystemTime> {
        let magnitude = secs.abs();
        if !magnitude.is_finite() || magnitude >= MAX_SECS {
            return None;
        }

        let whole = magnitude.trunc();
        let micros = ((magnitude - whole) * 1_000_000.0).round();
        let offset = Duration::from_secs(whole as u64) + Duration::from_micros(micros as u64);

        if secs.is_sign_negative() {
            UNIX_EPOCH.checked_sub(offset)
        } else {
            UNIX_EPOCH.checked_add(offset)
        }
    }

    /// Same encoding for optional timestamps; `None` maps to `null`.
    pub mod option {
        use std::time::SystemTime;

        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Propagates serializer errors.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            time: &Option<SystemTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(time) => super::serialize(time, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Fails if a present value is not a valid timestamp.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<SystemTime>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] SystemTime);

            Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(time)| time))
        }
    }
}
