//! Body codecs for request and response payloads.
//!
//! This module provides:
//! - The encode/decode contracts ([`EncodableBody`], [`DecodableBody`])
//! - The empty body ([`NoBody`])
//! - Form encodings ([`UrlEncodedBody`], [`MultipartFormDataBody`])
//! - The JSON adapter ([`JsonEncodableBody`], [`JsonDecodableBody`], [`epoch_seconds`])
//! - Codec failures ([`CodecError`])

mod decode;
mod encode;
mod error;
mod form;
mod json;
mod multipart;

#[cfg(test)]
mod multipart_tests;

pub use decode::DecodableBody;
pub use encode::{EncodableBody, NoBody};
pub use error::CodecError;
pub use form::UrlEncodedBody;
pub use json::{JsonDecodableBody, JsonEncodableBody, epoch_seconds};
pub use multipart::{MultipartFile, MultipartFormDataBody};
