use derive_more::Display;

/// Recoverable errors. Static configuration defects (a genesis mismatch, a
/// spacing table that does not divide evenly) are not represented here, they panic.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[display(fmt = "Invalid hex string '{}'", _0)]
    InvalidHex(String),
    #[display(fmt = "Wrong length: expected {} bytes, got {}", expected, actual)]
    InvalidLength { expected: usize, actual: usize },
    #[display(fmt = "Unknown chain '{}'", _0)]
    UnknownChain(String),
    #[display(fmt = "Unknown PoW algorithm '{}'", _0)]
    UnknownAlgo(String),
    #[display(fmt = "Invalid deployment '{}'", _0)]
    UnknownDeployment(String),
    #[display(fmt = "Activation height {} for {} is out of valid range. Use -1 to disable {}.", height, deployment, deployment)]
    InvalidActivationHeight { deployment: String, height: i64 },
    #[display(fmt = "Genesis {} mismatch: expected {}, computed {}", field, expected, actual)]
    GenesisMismatch { field: &'static str, expected: String, actual: String },
    #[display(fmt = "Settings error: {}", _0)]
    Settings(String),
}

impl std::error::Error for ParamsError {}
