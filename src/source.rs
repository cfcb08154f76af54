use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;


#[derive(Debug, Clone)]
pub enum SourceType {
    String(String),
    File(PathBuf),
}

// Represents a "source" of source code, either given directly or read from a file
#[derive(Debug, Clone)]
pub struct ModuleSource {
    name: String,
    source: SourceType,
}

impl ModuleSource {
    pub fn new(name: impl ToString, source: SourceType) -> Self {
        ModuleSource {
            name: name.to_string(),
            source,
        }
    }

    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn source(&self) -> &SourceType { &self.source }

    // Load the source text
    pub fn read_text(&self) -> io::Result<String> {
        match &self.source {
            SourceType::String(string) => Ok(string.clone()),
            SourceType::File(path) => fs::read_to_string(path),
        }
    }
}

impl fmt::Display for ModuleSource {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            SourceType::String(..) => write!(fmt, "{}", self.name),
            SourceType::File(path) => write!(fmt, "file \"{}\"", path.display()),
        }
    }
}
