use std::path::PathBuf;

use crate::error::SourceError;
use crate::schema::sample::SAMPLE_XML;

/// Supplies raw XML text for a form.
pub trait XmlSource {
    fn read_xml(&self) -> Result<String, SourceError>;

    /// Short description for logs and messages.
    fn describe(&self) -> String;
}

/// XML read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl XmlSource for FileSource {
    fn read_xml(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// XML pasted by the user. Blank input is rejected.
#[derive(Debug, Clone)]
pub struct PasteSource {
    pub text: String,
}

impl PasteSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl XmlSource for PasteSource {
    fn read_xml(&self) -> Result<String, SourceError> {
        if self.text.trim().is_empty() {
            return Err(SourceError::EmptyInput);
        }
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "pasted XML".to_string()
    }
}

/// The built-in sample form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl XmlSource for SampleSource {
    fn read_xml(&self) -> Result<String, SourceError> {
        Ok(SAMPLE_XML.to_string())
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}
