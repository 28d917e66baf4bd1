use crate::error::{ProbeError, Result};
use crate::kernels::Complex32;
use std::io::Write;

pub const VERSION_PREFIX: &str = "Volk Version ";
pub const MACHINES_PREFIX: &str = "volk Available Machines ";

/// What a single probe run saw from the library.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub version: String,
    pub machines: String,
    pub result: Complex32,
}

impl ProbeReport {
    pub fn to_lines(&self) -> String {
        format!(
            "{VERSION_PREFIX}{}\n{MACHINES_PREFIX}{}\n",
            self.version, self.machines
        )
    }

    pub fn machines(&self) -> Vec<&str> {
        split_machines(&self.machines)
    }

    pub fn check_shape(&self) -> Result<()> {
        check_shape(&self.version, &self.machines)
    }
}

/// The two lines of probe stdout, read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOutput {
    pub version: String,
    pub machines: String,
}

impl ParsedOutput {
    pub fn machines(&self) -> Vec<&str> {
        split_machines(&self.machines)
    }

    pub fn check_shape(&self) -> Result<()> {
        check_shape(&self.version, &self.machines)
    }
}

pub(crate) fn write_version_line<W: Write>(out: &mut W, version: &str) -> Result<()> {
    writeln!(out, "{VERSION_PREFIX}{version}")?;
    Ok(())
}

pub(crate) fn write_machines_line<W: Write>(out: &mut W, machines: &str) -> Result<()> {
    writeln!(out, "{MACHINES_PREFIX}{machines}")?;
    Ok(())
}

/// Machine lists come `;`-separated from libvolk, but older builds and
/// hand-written lists use commas or spaces.
pub fn split_machines(machines: &str) -> Vec<&str> {
    machines
        .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
        .filter(|m| !m.is_empty())
        .collect()
}

fn check_shape(version: &str, machines: &str) -> Result<()> {
    if version.trim().is_empty() {
        return Err(ProbeError::malformed("version string is empty"));
    }
    if version.contains('\n') {
        return Err(ProbeError::malformed("version string spans lines"));
    }
    if machines.trim().is_empty() {
        return Err(ProbeError::malformed("machine list is empty"));
    }
    if machines.contains('\n') {
        return Err(ProbeError::malformed("machine list spans lines"));
    }
    Ok(())
}

pub fn parse_output(stdout: &str) -> Result<ParsedOutput> {
    let lines: Vec<&str> = stdout.lines().collect();
    if lines.len() != 2 {
        return Err(ProbeError::malformed(format!(
            "expected 2 lines, got {}",
            lines.len()
        )));
    }

    let version = lines[0].strip_prefix(VERSION_PREFIX).ok_or_else(|| {
        ProbeError::malformed(format!(
            "line 1 does not start with '{VERSION_PREFIX}': {}",
            lines[0]
        ))
    })?;
    let machines = lines[1].strip_prefix(MACHINES_PREFIX).ok_or_else(|| {
        ProbeError::malformed(format!(
            "line 2 does not start with '{MACHINES_PREFIX}': {}",
            lines[1]
        ))
    })?;

    Ok(ParsedOutput {
        version: version.to_string(),
        machines: machines.to_string(),
    })
}
