//! `multipart/form-data` bodies.

use std::collections::BTreeMap;

use crate::transport::HttpRequest;

use super::{CodecError, EncodableBody};

/// A file part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    /// Raw file contents
    pub data: Vec<u8>,
    /// MIME type of the contents
    pub content_type: String,
    /// File name reported to the server
    pub filename: String,
}

impl MultipartFile {
    /// Creates a file part.
    pub fn new(
        data: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }
}

/// A `multipart/form-data` body made of scalar fields and files.
///
/// Scalar fields are written first, then files, each group in key order.
/// Every call to [`encode`](EncodableBody::encode) picks a fresh boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartFormDataBody {
    params: BTreeMap<String, String>,
    files: BTreeMap<String, MultipartFile>,
}

impl MultipartFormDataBody {
    /// Creates an empty multipart body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar field, replacing any previous value for `name`.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Adds a file part, replacing any previous file for `name`.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, file: MultipartFile) -> Self {
        self.files.insert(name.into(), file);
        self
    }

    /// Returns the scalar fields.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Returns the file parts.
    #[must_use]
    pub const fn files(&self) -> &BTreeMap<String, MultipartFile> {
        &self.files
    }

    /// Serializes all parts using `boundary` as the delimiter.
    #[must_use]
    pub fn to_bytes(&self, boundary: &str) -> Vec<u8> {
        let mut data = Vec::new();

        for (name, value) in &self.params {
            data.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            data.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            );
            data.extend_from_slice(format!("{value}\r\n").as_bytes());
        }

        for (name, file) in &self.files {
            data.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            data.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{}\"\r\n",
                    file.filename
                )
                .as_bytes(),
            );
            data.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
            data.extend_from_slice(&file.data);
            data.extend_from_slice(b"\r\n");
        }

        data.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        data
    }
}

impl EncodableBody for MultipartFormDataBody {
    fn encode(&self, request: &mut HttpRequest) -> Result<(), CodecError> {
        let boundary = uuid::Uuid::new_v4().to_string();
        let content_type = format!("multipart/form-data; boundary={boundary}");
        let value = http::HeaderValue::from_str(&content_type).map_err(|e| {
            CodecError::InvalidHeader {
                name: http::header::CONTENT_TYPE.to_string(),
                reason: e.to_string(),
            }
        })?;

        request.body = Some(self.to_bytes(&boundary));
        request.set_content_type(value);
        Ok(())
    }
}
