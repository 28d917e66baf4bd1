use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The library handed back a NULL string from an introspection call.
    #[error("{0} returned a null string")]
    NullString(&'static str),

    /// A kernel dispatcher pointer was never initialized by the library.
    #[error("kernel {0} is not available")]
    MissingKernel(&'static str),

    #[error("input has {input} points but taps has {taps}")]
    LengthMismatch { input: usize, taps: usize },

    #[error("{0} points do not fit in an unsigned int")]
    TooManyPoints(usize),

    #[error("malformed probe output: {0}")]
    MalformedOutput(String),

    #[error("failed to write probe output: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedOutput(message.into())
    }

    /// Exit status for the probe binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::NullString(_)
            | ProbeError::MissingKernel(_)
            | ProbeError::LengthMismatch { .. }
            | ProbeError::TooManyPoints(_)
            | ProbeError::MalformedOutput(_)
            | ProbeError::Io(_) => 1,
        }
    }
}
