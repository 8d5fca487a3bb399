#[derive(Debug, Clone, PartialEq)]
pub struct ModuleError {
    pub message: String,
}

impl ModuleError {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl std::fmt::Display for ModuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Execution module unavailable: {}", self.message)
    }
}

impl std::error::Error for ModuleError {}

impl From<std::io::Error> for ModuleError {
    fn from(err: std::io::Error) -> Self {
        ModuleError::new(err.to_string())
    }
}

/// Why a run never started. Either way the display was left untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// No execution module has been attached yet.
    ModuleNotReady,
    /// A module is attached but refused to start the run.
    ModuleUnavailable(ModuleError),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::ModuleNotReady => write!(f, "Execution module not ready"),
            BridgeError::ModuleUnavailable(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::ModuleUnavailable(err) => Some(err),
            BridgeError::ModuleNotReady => None,
        }
    }
}

impl From<ModuleError> for BridgeError {
    fn from(err: ModuleError) -> Self {
        BridgeError::ModuleUnavailable(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleError {
    pub name: String,
}

impl SampleError {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sample not found: {}", self.name)
    }
}

impl std::error::Error for SampleError {}
