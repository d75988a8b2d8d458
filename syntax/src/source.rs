//! Abstractions over reading files and source code used in the parser.

use std::fs;
use std::io;
use std::path::Path;

/// Holds information about a source file being parsed in memory.
pub struct SourceFile {
    name: Option<String>,
    buffer: String,
}

impl SourceFile {
    /// Create a new file map using an in-memory buffer.
    pub fn buffer(name: impl Into<Option<String>>, buffer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buffer: buffer.into(),
        }
    }

    /// Open a file as a file map.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let name = path.file_name().map(|s| s.to_string_lossy().into_owned());

        fs::read_to_string(path).map(|string| Self::buffer(name, string))
    }

    /// Get the name of the file.
    pub fn name(&self) -> &str {
        self.name
            .as_ref()
            .map(String::as_str)
            .unwrap_or("<unknown>")
    }

    pub fn source(&self) -> &str {
        &self.buffer
    }
}

impl From<&str> for SourceFile {
    fn from(source: &str) -> Self {
        Self::buffer(None, source)
    }
}

impl From<String> for SourceFile {
    fn from(source: String) -> Self {
        Self::buffer(None, source)
    }
}
