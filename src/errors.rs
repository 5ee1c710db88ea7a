use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortlyError {
    FileOperation(String),
    StashCorrupt(String),
    Serialization(String),
    Validation(String),
    NotFound(String),
    SpaceExhausted(String),
    Clipboard(String),
    Notify(String),
    Lock(String),
    Http(String),
}

impl ShortlyError {
    /// Stable error code, used in colored output and logs
    pub fn code(&self) -> &'static str {
        match self {
            ShortlyError::FileOperation(_) => "E001",
            ShortlyError::StashCorrupt(_) => "E002",
            ShortlyError::Serialization(_) => "E003",
            ShortlyError::Validation(_) => "E004",
            ShortlyError::NotFound(_) => "E005",
            ShortlyError::SpaceExhausted(_) => "E006",
            ShortlyError::Clipboard(_) => "E007",
            ShortlyError::Notify(_) => "E008",
            ShortlyError::Lock(_) => "E009",
            ShortlyError::Http(_) => "E010",
        }
    }

    /// Human-readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortlyError::FileOperation(_) => "File Operation Error",
            ShortlyError::StashCorrupt(_) => "Corrupt Stash",
            ShortlyError::Serialization(_) => "Serialization Error",
            ShortlyError::Validation(_) => "Validation Error",
            ShortlyError::NotFound(_) => "Resource Not Found",
            ShortlyError::SpaceExhausted(_) => "Identifier Space Exhausted",
            ShortlyError::Clipboard(_) => "Clipboard Error",
            ShortlyError::Notify(_) => "Notify Error",
            ShortlyError::Lock(_) => "Lock Error",
            ShortlyError::Http(_) => "HTTP Error",
        }
    }

    /// Error detail message
    pub fn message(&self) -> &str {
        match self {
            ShortlyError::FileOperation(msg) => msg,
            ShortlyError::StashCorrupt(msg) => msg,
            ShortlyError::Serialization(msg) => msg,
            ShortlyError::Validation(msg) => msg,
            ShortlyError::NotFound(msg) => msg,
            ShortlyError::SpaceExhausted(msg) => msg,
            ShortlyError::Clipboard(msg) => msg,
            ShortlyError::Notify(msg) => msg,
            ShortlyError::Lock(msg) => msg,
            ShortlyError::Http(msg) => msg,
        }
    }

    /// Colored multi-line format for terminal output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// Single-line format for logs and plain contexts
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortlyError {}

// Convenience constructors
impl ShortlyError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortlyError::FileOperation(msg.into())
    }

    pub fn stash_corrupt<T: Into<String>>(msg: T) -> Self {
        ShortlyError::StashCorrupt(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortlyError::NotFound(msg.into())
    }

    pub fn space_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortlyError::SpaceExhausted(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Clipboard(msg.into())
    }

    pub fn notify<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Notify(msg.into())
    }

    pub fn lock<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Lock(msg.into())
    }

    pub fn http<T: Into<String>>(msg: T) -> Self {
        ShortlyError::Http(msg.into())
    }
}

// From impls for common underlying error types
impl From<std::io::Error> for ShortlyError {
    fn from(err: std::io::Error) -> Self {
        ShortlyError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortlyError {
    fn from(err: serde_json::Error) -> Self {
        ShortlyError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortlyError>;
