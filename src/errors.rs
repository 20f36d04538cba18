use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// General parse failure of an attribute or numeric value
    Parse(String),
    /// Input document is not usable SVG (missing root, bad XML, ...)
    Document(String),
    MissingAttribute(String),
    /// Path data token does not match the path mini-language grammar
    MalformedPathData(String),
    /// Path data ended part-way through an instruction's operands
    TruncatedPathData(String),
    /// Arc radius too small for the chord between its endpoints
    ArcNotFeasible { radius: f32, chord: f32 },
    /// Letter outside the supported path command set
    UnsupportedCommand(char),
    Cli(String),
    Other(Box<dyn StdError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::MissingAttribute(attr) => write!(f, "Element missing attribute '{attr}'"),
            Error::MalformedPathData(reason) => write!(f, "Malformed path data: {reason}"),
            Error::TruncatedPathData(reason) => write!(f, "Truncated path data: {reason}"),
            Error::ArcNotFeasible { radius, chord } => {
                write!(f, "Arc radius {radius} too small for chord length {chord}")
            }
            Error::UnsupportedCommand(cmd) => write!(f, "Unsupported path command '{cmd}'"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(source) => Some(&**source),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error::Parse(err.to_string())
    }
}
