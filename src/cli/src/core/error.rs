use al_lib::{BridgeError, SampleError};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum AlError {
    Io(io::Error),
    Sample(SampleError),
    Bridge(BridgeError),
    Validation(String),
    Generic(String),
}

impl fmt::Display for AlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlError::Io(err) => write!(f, "IO error: {err}"),
            AlError::Sample(err) => write!(f, "{err}"),
            AlError::Bridge(err) => write!(f, "{err}"),
            AlError::Validation(msg) => write!(f, "Validation error: {msg}"),
            AlError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlError::Io(err) => Some(err),
            AlError::Sample(err) => Some(err),
            AlError::Bridge(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AlError {
    fn from(err: io::Error) -> Self {
        AlError::Io(err)
    }
}

impl From<SampleError> for AlError {
    fn from(err: SampleError) -> Self {
        AlError::Sample(err)
    }
}

impl From<BridgeError> for AlError {
    fn from(err: BridgeError) -> Self {
        AlError::Bridge(err)
    }
}

impl From<String> for AlError {
    fn from(msg: String) -> Self {
        AlError::Generic(msg)
    }
}

impl From<&str> for AlError {
    fn from(msg: &str) -> Self {
        AlError::Generic(msg.to_string())
    }
}
