pub mod error;
pub mod kernels;
pub mod probe;
pub mod report;

#[cfg(feature = "volk")]
pub mod ffi;

pub use error::{ProbeError, Result};
pub use kernels::{Complex32, Kernels};
pub use probe::{run, TAP_COUNT};
pub use report::{parse_output, ParsedOutput, ProbeReport};

#[cfg(feature = "volk")]
pub use kernels::SystemVolk;
