use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    FileNotFound(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::FileNotFound(path) => {
                write!(f, "File not found at path '{}'.", path)
            }
        }
    }
}
