//! Format-aware document loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, io};

/// Structured document grammars the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    /// Decode raw file content as UTF-8 text.
    ///
    /// Invalid UTF-8 is content the grammar cannot accept, so it yields
    /// `MalformedDocument` rather than a read error.
    pub fn decode_text(&self, path: &Path, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| self.malformed(path, e.to_string()))
    }

    /// Deserialize `content`, attributing any failure to `path`.
    ///
    /// Decoding is all-or-nothing: a document that fails anywhere yields
    /// `MalformedDocument` and no partial value.
    pub fn parse<T: DeserializeOwned>(&self, path: &Path, content: &str) -> Result<T> {
        let parsed = match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| self.malformed(path, message))
    }

    fn malformed(&self, path: &Path, message: String) -> Error {
        Error::MalformedDocument {
            path: path.to_path_buf(),
            format: self.name().into(),
            message,
        }
    }
}

/// Loads structured documents from disk.
///
/// The caller names the format; file extensions are never consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Read the text of a document without deserializing it.
    ///
    /// Fails with `NotFound` if the file cannot be read and with
    /// `MalformedDocument` if it is not valid UTF-8.
    pub fn read_source(&self, path: &Path, format: Format) -> Result<String> {
        let bytes = io::read_bytes(path)?;
        format.decode_text(path, bytes)
    }

    /// Load and deserialize a document in the given format.
    ///
    /// Fails with `NotFound` if the file cannot be read and with
    /// `MalformedDocument` if its content does not parse.
    pub fn load_as<T: DeserializeOwned>(&self, path: &Path, format: Format) -> Result<T> {
        let content = self.read_source(path, format)?;
        tracing::debug!(path = %path.display(), format = format.name(), "Decoding document");
        format.parse(path, &content)
    }
}
