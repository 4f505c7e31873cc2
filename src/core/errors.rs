use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanagridError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No Japanese font found in the system font directories")]
    NoJapaneseFont,
}

impl From<std::io::Error> for KanagridError {
    fn from(error: std::io::Error) -> Self {
        KanagridError::Io(Box::new(error))
    }
}
