use crate::error::{ProbeError, Result};
use std::fmt;

/// Single-precision complex value, laid out like VOLK's `lv_32fc_t`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

impl Complex32 {
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

pub trait Kernels {
    fn version(&self) -> Result<String>;

    fn available_machines(&self) -> Result<String>;

    fn alignment(&self) -> usize;

    /// `result = sum(input[i] * taps[i])`. Both slices must be the same length.
    fn dot_prod_32fc_32f(
        &self,
        result: &mut Complex32,
        input: &[Complex32],
        taps: &[f32],
    ) -> Result<()>;
}

/// Checks the buffers handed to a dot-product kernel and returns the C point count.
pub fn point_count(input: &[Complex32], taps: &[f32]) -> Result<u32> {
    if input.len() != taps.len() {
        return Err(ProbeError::LengthMismatch {
            input: input.len(),
            taps: taps.len(),
        });
    }
    u32::try_from(taps.len()).map_err(|_| ProbeError::TooManyPoints(taps.len()))
}

#[cfg(feature = "volk")]
pub use system::SystemVolk;

#[cfg(feature = "volk")]
mod system {
    use super::{point_count, Complex32, Kernels};
    use crate::error::{ProbeError, Result};
    use crate::ffi;
    use std::ffi::CStr;
    use std::os::raw::c_char;

    /// The libvolk this binary was linked against.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SystemVolk;

    impl SystemVolk {
        pub fn new() -> Self {
            Self
        }
    }

    fn owned_string(ptr: *const c_char, what: &'static str) -> Result<String> {
        if ptr.is_null() {
            return Err(ProbeError::NullString(what));
        }
        // The library keeps these strings alive for the whole process
        let s = unsafe { CStr::from_ptr(ptr) };
        Ok(s.to_string_lossy().into_owned())
    }

    impl Kernels for SystemVolk {
        fn version(&self) -> Result<String> {
            owned_string(unsafe { ffi::volk_version() }, "volk_version")
        }

        fn available_machines(&self) -> Result<String> {
            owned_string(
                unsafe { ffi::volk_available_machines() },
                "volk_available_machines",
            )
        }

        fn alignment(&self) -> usize {
            unsafe { ffi::volk_get_alignment() }
        }

        fn dot_prod_32fc_32f(
            &self,
            result: &mut Complex32,
            input: &[Complex32],
            taps: &[f32],
        ) -> Result<()> {
            let num_points = point_count(input, taps)?;
            // C rewrites the dispatcher after the first call, so load it fresh each time
            let kernel = unsafe { std::ptr::addr_of!(ffi::volk_32fc_32f_dot_prod_32fc_u).read() }
                .ok_or(ProbeError::MissingKernel("volk_32fc_32f_dot_prod_32fc_u"))?;
            tracing::trace!(num_points, "calling volk_32fc_32f_dot_prod_32fc_u");
            unsafe { kernel(result, input.as_ptr(), taps.as_ptr(), num_points) };
            Ok(())
        }
    }
}
