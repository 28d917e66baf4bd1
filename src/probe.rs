use crate::error::Result;
use crate::kernels::{Complex32, Kernels};
use crate::report::{write_machines_line, write_version_line, ProbeReport};
use std::io::Write;

pub const TAP_COUNT: usize = 8;

/// Runs the probe sequence against `kernels`, writing the version and machine
/// lines to `out` as each value arrives.
///
/// The dot product runs on zeroed buffers and its value is never checked;
/// returning at all means the kernel resolved and executed.
pub fn run<K: Kernels, W: Write>(kernels: &K, out: &mut W) -> Result<ProbeReport> {
    let version = kernels.version()?;
    write_version_line(out, &version)?;

    let machines = kernels.available_machines()?;
    write_machines_line(out, &machines)?;

    let alignment = kernels.alignment();
    tracing::debug!(alignment, "volk buffer alignment");

    let taps = [0.0f32; TAP_COUNT];
    let input = [Complex32::default(); TAP_COUNT];
    let mut result = Complex32::default();
    kernels.dot_prod_32fc_32f(&mut result, &input, &taps)?;
    tracing::debug!(%result, "dot product returned");

    out.flush()?;
    Ok(ProbeReport {
        version,
        machines,
        result,
    })
}
