// Request body encodings. Every body is fully materialized before a request
// is built, so a failing serializer or reader surfaces as
// `ApiError::Encoding` before any network I/O.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use reqwest::blocking::{multipart, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use super::error::ApiError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A file to upload as a multipart part: its name and its full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

impl Upload {
    /// Drain `reader` into memory under the given file name.
    pub fn from_reader(
        file_name: impl Into<String>,
        mut reader: impl Read,
    ) -> Result<Self, ApiError> {
        let file_name = file_name.into();
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ApiError::Encoding(format!("reading {file_name}: {e}")))?;
        Ok(Self { file_name, bytes })
    }

    /// Open and read a file, taking the part's file name from the path.
    pub fn open(path: &Path) -> Result<Self, ApiError> {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ApiError::Encoding(format!("{} has no file name", path.display())))?
            .to_string();
        let file = File::open(path)
            .map_err(|e| ApiError::Encoding(format!("opening {}: {e}", path.display())))?;
        Self::from_reader(file_name, file)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// How the payload of an outgoing request is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No payload.
    Empty,
    /// Pre-serialized bytes with an explicit content type.
    Raw { content_type: String, bytes: Vec<u8> },
    /// Serialized JSON, sent as `application/json`.
    Json(Vec<u8>),
    /// A single-part `multipart/form-data` upload.
    Multipart { field: String, upload: Upload },
}

impl Body {
    /// Serialize `value` to JSON. Unset `Option` fields marked
    /// `skip_serializing_if` are left out of the output.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_vec(value)
            .map(Body::Json)
            .map_err(|e| ApiError::Encoding(e.to_string()))
    }

    /// Drain `reader` into a raw body of the given content type.
    pub fn raw(content_type: impl Into<String>, mut reader: impl Read) -> Result<Self, ApiError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ApiError::Encoding(format!("reading request body: {e}")))?;
        Ok(Body::Raw {
            content_type: content_type.into(),
            bytes,
        })
    }

    pub fn multipart(field: impl Into<String>, upload: Upload) -> Self {
        Body::Multipart {
            field: field.into(),
            upload,
        }
    }

    /// Attach this body and its content type to a request under construction.
    pub(crate) fn apply(self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Body::Empty => builder,
            Body::Raw { content_type, bytes } => {
                builder.header(CONTENT_TYPE, content_type).body(bytes)
            }
            Body::Json(bytes) => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes),
            Body::Multipart { field, upload } => {
                let part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
                builder.multipart(multipart::Form::new().part(field, part))
            }
        }
    }
}
