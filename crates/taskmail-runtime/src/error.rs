use std::fmt;

/// Result type for taskmail-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),

    /// Sender or recipient address could not be parsed
    Address(lettre::address::AddressError),

    /// MIME message could not be assembled
    Message(lettre::error::Error),

    /// SMTP connection, authentication or send failed
    Transport(lettre::transport::smtp::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Address(err) => write!(f, "Invalid address: {}", err),
            Error::Message(err) => write!(f, "Message error: {}", err),
            Error::Transport(err) => write!(f, "SMTP error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Address(err) => Some(err),
            Error::Message(err) => Some(err),
            Error::Transport(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<lettre::address::AddressError> for Error {
    fn from(err: lettre::address::AddressError) -> Self {
        Error::Address(err)
    }
}

impl From<lettre::error::Error> for Error {
    fn from(err: lettre::error::Error) -> Self {
        Error::Message(err)
    }
}

impl From<lettre::transport::smtp::Error> for Error {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Error::Transport(err)
    }
}
