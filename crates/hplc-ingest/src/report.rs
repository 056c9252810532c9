//! Raw report reading.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// One instrument-exported report: its file name plus its text lines.
///
/// The whole file is read eagerly so the handle is released before parsing
/// begins; the contents are immutable from then on.
#[derive(Debug, Clone)]
pub struct RawReport {
    name: String,
    lines: Vec<String>,
}

impl RawReport {
    /// Read a report from disk. The report name is the file name component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_reader(name, file)
    }

    /// Read a report from any byte stream, as handed over by an upload layer.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self> {
        let name = name.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| IngestError::FileRead {
                path: PathBuf::from(&name),
                source,
            })?;
        Ok(Self::from_text(name, &text))
    }

    /// Build a report from already-loaded text. Lines keep no terminators;
    /// a trailing `\r` from CRLF files is stripped.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}
