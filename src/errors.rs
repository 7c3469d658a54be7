use std::fmt;

/// An elevation raster could not be produced from its input source.
#[derive(Debug)]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> LoadError {
        LoadError {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LoadError {}

/// A shaded image could not be persisted.
#[derive(Debug)]
pub struct SaveError {
    pub message: String,
}

impl SaveError {
    pub fn new(message: impl Into<String>) -> SaveError {
        SaveError {
            message: message.into(),
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SaveError {}
