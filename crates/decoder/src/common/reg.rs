//! Unified Register File.
//!
//! This module provides the `RegisterFile` consumed by the decoder's register
//! index fields. It provides:
//! 1. **Unified Storage:** Integer (`x0`-`x31`) and floating-point (`f0`-`f31`) registers.
//! 2. **Port Semantics:** Any number of read ports, one write port per cycle. A read
//!    port with no register selected returns `None` rather than a stale value.
//! 3. **Invariant Enforcement:** `x0` reads as zero and ignores writes.
//!
//! A select outside `0..32` drives no register: reads return `None` and
//! writes are dropped.
//!
//! Register selection is a plain index into the backing array; the hardware
//! one-hot address fan-out has no software counterpart.

/// Number of architectural registers per file.
pub const NUM_REGS: usize = 32;

/// Register file containing both general-purpose and floating-point registers.
///
/// Values are stored 64 bits wide; an RV32 core simply never writes the upper
/// half of an integer register.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: [u64; NUM_REGS],
    fpr: [u64; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register cleared to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an integer register through a read port.
    ///
    /// # Arguments
    ///
    /// * `sel` - Selected register index, or `None` if the port is not driven.
    ///
    /// # Returns
    ///
    /// `None` for an unselected or out-of-range port, `Some(0)` for `x0`,
    /// otherwise the stored value.
    pub fn read(&self, sel: Option<u8>) -> Option<u64> {
        match sel? {
            0 => Some(0),
            idx => self.gpr.get(usize::from(idx)).copied(),
        }
    }

    /// Drives the integer write port.
    ///
    /// Writes to `x0`, out-of-range selects, and undriven ports (`None`) are
    /// ignored.
    pub fn write(&mut self, sel: Option<u8>, val: u64) {
        if let Some(slot) = sel
            .filter(|&idx| idx != 0)
            .and_then(|idx| self.gpr.get_mut(usize::from(idx)))
        {
            *slot = val;
        }
    }

    /// Reads a floating-point register through a read port.
    pub fn read_f(&self, sel: Option<u8>) -> Option<u64> {
        self.fpr.get(usize::from(sel?)).copied()
    }

    /// Drives the floating-point write port. Undriven and out-of-range ports
    /// are ignored.
    pub fn write_f(&mut self, sel: Option<u8>, val: u64) {
        if let Some(slot) = sel.and_then(|idx| self.fpr.get_mut(usize::from(idx))) {
            *slot = val;
        }
    }

    /// Renders the integer registers in pairs for debug output.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in (0..NUM_REGS).step_by(2) {
            out.push_str(&format!(
                "x{:<2}={:#018x} x{:<2}={:#018x}\n",
                i,
                self.gpr[i],
                i + 1,
                self.gpr[i + 1]
            ));
        }
        out
    }
}
