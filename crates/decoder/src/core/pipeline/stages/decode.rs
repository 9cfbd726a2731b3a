//! Instruction Decode (ID) Stage.
//!
//! This module wraps the stateless decoder in a clocked stage. Each call to
//! [`DecodeStage::tick`] is one cycle:
//! 1. **Stall:** The previously latched result is re-presented; nothing is
//!    decoded and nothing new commits.
//! 2. **Bubble:** With no valid instruction from fetch, no decode runs and the
//!    output latch empties.
//! 3. **Decode:** Otherwise the word is decoded exactly once and the outcome,
//!    legal or illegal, is latched.
//!
//! [`DecodeStage::reset`] discards the latched result and returns to idle.

use crate::config::{Config, Xlen};
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::stats::DecodeStats;

/// Decode stage with its ID/EX output latch.
#[derive(Clone, Debug, Default)]
pub struct DecodeStage {
    xlen: Xlen,
    trace: bool,
    latch: Option<IdExEntry>,
    stats: DecodeStats,
}

impl DecodeStage {
    /// Creates an idle stage configured from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            xlen: config.decoder.xlen,
            trace: config.general.trace_decode,
            latch: None,
            stats: DecodeStats::default(),
        }
    }

    /// Creates an idle stage for `xlen` with tracing off.
    pub fn with_xlen(xlen: Xlen) -> Self {
        Self {
            xlen,
            ..Self::default()
        }
    }

    /// Register width the stage decodes for.
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Advances the stage by one cycle.
    ///
    /// # Arguments
    ///
    /// * `input` - IF/ID entry, or `None` if fetch produced no valid word.
    /// * `stall` - Hold the current output instead of accepting `input`.
    ///
    /// # Returns
    ///
    /// The ID/EX latch contents after this cycle.
    pub fn tick(&mut self, input: Option<&IfIdEntry>, stall: bool) -> Option<&IdExEntry> {
        if stall {
            self.stats.record_stall();
            tracing::debug!(held = self.latch.is_some(), "decode stalled");
            return self.latch.as_ref();
        }

        let Some(entry) = input else {
            self.stats.record_bubble();
            self.latch = None;
            return None;
        };

        let outcome = decode(entry.inst, self.xlen);
        self.stats.record(&outcome);
        if self.trace {
            match &outcome {
                Ok(d) => tracing::info!(
                    pc = format_args!("{:#x}", entry.pc),
                    raw = format_args!("{:#010x}", entry.inst),
                    "{}",
                    disassemble(d)
                ),
                Err(err) => tracing::info!(pc = format_args!("{:#x}", entry.pc), "{err}"),
            }
        }

        self.latch = Some(IdExEntry {
            pc: entry.pc,
            inst: entry.inst,
            outcome,
        });
        self.latch.as_ref()
    }

    /// Current ID/EX latch contents.
    pub const fn output(&self) -> Option<&IdExEntry> {
        self.latch.as_ref()
    }

    /// Discards the latched result and returns the stage to idle.
    ///
    /// Statistics are kept.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.latch.is_some(), "decode reset");
        self.latch = None;
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &DecodeStats {
        &self.stats
    }
}

impl PipelineLatch for DecodeStage {
    fn flush(&mut self) {
        self.latch = None;
    }

    fn is_empty(&self) -> bool {
        self.latch.is_none()
    }

    fn has_trap(&self) -> bool {
        self.latch.as_ref().is_some_and(IdExEntry::is_trap)
    }
}
