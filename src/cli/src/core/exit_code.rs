use crate::core::error::AlError;
use al_lib::{BridgeError, SampleError};

/// Exit codes for the al CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General/unspecified error
    GeneralError = 1,
    /// File could not be read
    FileError = 4,
    /// Sample or other named resource not found
    NotFoundError = 5,
    /// The execution module could not be started
    ModuleNotReady = 6,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&AlError> for ExitCode {
    fn from(error: &AlError) -> Self {
        match error {
            AlError::Io(_) => ExitCode::FileError,
            AlError::Sample(_) => ExitCode::NotFoundError,
            AlError::Bridge(_) => ExitCode::ModuleNotReady,
            AlError::Validation(_) | AlError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(al_error) = error.downcast_ref::<AlError>() {
            ExitCode::from(al_error)
        } else if error.downcast_ref::<BridgeError>().is_some() {
            ExitCode::ModuleNotReady
        } else if error.downcast_ref::<SampleError>().is_some() {
            ExitCode::NotFoundError
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
