//! Decode statistics collection and reporting.
//!
//! This module tracks what the decoder saw over a run. It provides:
//! 1. **Throughput:** Words decoded, legal and illegal outcomes.
//! 2. **Instruction mix:** Counts by operation category (ALU, FPU, memory, ...).
//! 3. **Illegal causes:** Counts by rejection reason.
//! 4. **Stage activity:** Stall and bubble cycles seen by the decode stage.

use std::fmt;

use serde::Serialize;

use crate::common::error::{IllegalInstruction, IllegalReason};
use crate::isa::decode::{DecodeResult, OpCategory};

/// Decode statistics.
///
/// Counters only ever increase; use [`DecodeStats::default`] to start over.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Words presented to the decoder.
    pub decoded: u64,
    /// Words that decoded to a valid result.
    pub legal: u64,
    /// Words rejected as illegal.
    pub illegal: u64,

    /// Integer ALU operations.
    pub inst_alu: u64,
    /// Single-precision FPU operations.
    pub inst_fpu_single: u64,
    /// Double-precision FPU operations.
    pub inst_fpu_double: u64,
    /// Loads, stores, and AMOs.
    pub inst_memory: u64,
    /// FENCE and FENCE.I.
    pub inst_fence: u64,
    /// Conditional branches.
    pub inst_branch: u64,
    /// JAL and JALR.
    pub inst_jump: u64,
    /// LUI and AUIPC.
    pub inst_upper_imm: u64,
    /// SYSTEM instructions.
    pub inst_system: u64,

    /// Rejected: not a 32-bit encoding.
    pub illegal_not_32bit: u64,
    /// Rejected: unsupported opcode class.
    pub illegal_unsupported_class: u64,
    /// Rejected: no matching operation.
    pub illegal_no_match: u64,
    /// Rejected: RV64-only operation on an RV32 decoder.
    pub illegal_rv64_only: u64,
    /// Rejected: reserved bits set.
    pub illegal_reserved_bits: u64,

    /// Cycles the decode stage held its output because of a stall.
    pub stalls: u64,
    /// Cycles the decode stage received no valid instruction.
    pub bubbles: u64,
}

impl DecodeStats {
    /// Records one decode outcome.
    pub fn record(&mut self, outcome: &Result<DecodeResult, IllegalInstruction>) {
        self.decoded += 1;
        match outcome {
            Ok(result) => {
                self.legal += 1;
                *self.category_counter(result.category) += 1;
            }
            Err(err) => {
                self.illegal += 1;
                *self.reason_counter(err.reason) += 1;
            }
        }
    }

    /// Records a stalled cycle.
    pub const fn record_stall(&mut self) {
        self.stalls += 1;
    }

    /// Records a cycle with no valid input.
    pub const fn record_bubble(&mut self) {
        self.bubbles += 1;
    }

    /// Count for one operation category.
    pub const fn category_count(&self, category: OpCategory) -> u64 {
        match category {
            OpCategory::Alu => self.inst_alu,
            OpCategory::FpuSingle => self.inst_fpu_single,
            OpCategory::FpuDouble => self.inst_fpu_double,
            OpCategory::Memory => self.inst_memory,
            OpCategory::Fence => self.inst_fence,
            OpCategory::Branch => self.inst_branch,
            OpCategory::Jump => self.inst_jump,
            OpCategory::UpperImm => self.inst_upper_imm,
            OpCategory::System => self.inst_system,
        }
    }

    const fn category_counter(&mut self, category: OpCategory) -> &mut u64 {
        match category {
            OpCategory::Alu => &mut self.inst_alu,
            OpCategory::FpuSingle => &mut self.inst_fpu_single,
            OpCategory::FpuDouble => &mut self.inst_fpu_double,
            OpCategory::Memory => &mut self.inst_memory,
            OpCategory::Fence => &mut self.inst_fence,
            OpCategory::Branch => &mut self.inst_branch,
            OpCategory::Jump => &mut self.inst_jump,
            OpCategory::UpperImm => &mut self.inst_upper_imm,
            OpCategory::System => &mut self.inst_system,
        }
    }

    const fn reason_counter(&mut self, reason: IllegalReason) -> &mut u64 {
        match reason {
            IllegalReason::NotThirtyTwoBit => &mut self.illegal_not_32bit,
            IllegalReason::UnsupportedClass => &mut self.illegal_unsupported_class,
            IllegalReason::NoMatch => &mut self.illegal_no_match,
            IllegalReason::Rv64Only => &mut self.illegal_rv64_only,
            IllegalReason::ReservedBits => &mut self.illegal_reserved_bits,
        }
    }

    /// Renders the statistics as a plain-text report.
    ///
    /// See the [`fmt::Display`] impl for the layout.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// Plain-text report.
///
/// Percentages are relative to `decoded` (instruction mix uses `legal`);
/// zero denominators are treated as one.
impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.decoded.max(1) as f64;
        let legal = self.legal.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "RISC-V DECODE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "decode.words             {}", self.decoded)?;
        writeln!(
            f,
            "decode.legal             {} ({:.2}%)",
            self.legal,
            pct(self.legal, total)
        )?;
        writeln!(
            f,
            "decode.illegal           {} ({:.2}%)",
            self.illegal,
            pct(self.illegal, total)
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.alu", self.inst_alu),
            ("op.fpu_single", self.inst_fpu_single),
            ("op.fpu_double", self.inst_fpu_double),
            ("op.memory", self.inst_memory),
            ("op.fence", self.inst_fence),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.upper_imm", self.inst_upper_imm),
            ("op.system", self.inst_system),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n, legal))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "ILLEGAL INSTRUCTIONS")?;
        for (name, n) in [
            ("illegal.not_32bit", self.illegal_not_32bit),
            ("illegal.unsupported", self.illegal_unsupported_class),
            ("illegal.no_match", self.illegal_no_match),
            ("illegal.rv64_only", self.illegal_rv64_only),
            ("illegal.reserved_bits", self.illegal_reserved_bits),
        ] {
            writeln!(f, "  {name:<22} {n}")?;
        }
        if self.stalls > 0 || self.bubbles > 0 {
            writeln!(f, "----------------------------------------------------------")?;
            writeln!(f, "DECODE STAGE")?;
            writeln!(f, "  stage.stalls           {}", self.stalls)?;
            writeln!(f, "  stage.bubbles          {}", self.bubbles)?;
        }
        writeln!(f, "==========================================================")
    }
}
