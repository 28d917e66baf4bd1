#![allow(dead_code)]

use std::cell::RefCell;
use volk_probe::{Complex32, Kernels, ProbeError, Result};

/// Stand-in for libvolk that records what the probe handed it.
pub struct FakeKernels {
    pub version: Option<String>,
    pub machines: Option<String>,
    pub output: Complex32,
    pub calls: RefCell<Vec<&'static str>>,
    pub seen_points: RefCell<Option<(usize, usize)>>,
}

impl FakeKernels {
    pub fn new(version: &str, machines: &str) -> Self {
        Self {
            version: Some(version.to_string()),
            machines: Some(machines.to_string()),
            output: Complex32::new(1.5, -2.0),
            calls: RefCell::new(Vec::new()),
            seen_points: RefCell::new(None),
        }
    }
}

impl Kernels for FakeKernels {
    fn version(&self) -> Result<String> {
        self.calls.borrow_mut().push("version");
        self.version
            .clone()
            .ok_or(ProbeError::NullString("volk_version"))
    }

    fn available_machines(&self) -> Result<String> {
        self.calls.borrow_mut().push("available_machines");
        self.machines
            .clone()
            .ok_or(ProbeError::NullString("volk_available_machines"))
    }

    fn alignment(&self) -> usize {
        self.calls.borrow_mut().push("alignment");
        32
    }

    fn dot_prod_32fc_32f(
        &self,
        result: &mut Complex32,
        input: &[Complex32],
        taps: &[f32],
    ) -> Result<()> {
        self.calls.borrow_mut().push("dot_prod");
        volk_probe::kernels::point_count(input, taps)?;
        *self.seen_points.borrow_mut() = Some((input.len(), taps.len()));
        *result = self.output;
        Ok(())
    }
}

pub struct TestOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

#[cfg(feature = "volk")]
pub fn run_probe_binary(args: &[&str]) -> TestOutput {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_volk-probe"))
        .args(args)
        .output()
        .expect("failed to execute volk-probe");
    TestOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}
