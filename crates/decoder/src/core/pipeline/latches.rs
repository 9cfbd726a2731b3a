//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried into and out of the decode
//! stage:
//! 1. **IF/ID:** The fetched word and its program counter.
//! 2. **ID/EX:** The decode outcome, legal or illegal, for the execute side.
//! 3. **Operand read:** Register-file port reads driven by a decoded entry.

use serde::Serialize;

use crate::common::error::IllegalInstruction;
use crate::common::reg::RegisterFile;
use crate::isa::decode::{DecodeResult, SystemOp};
use crate::isa::opcode::OpcodeClass;
use crate::isa::subcode::{AtomicOp, OperationSubcode};

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

impl IfIdEntry {
    /// Creates an entry for `inst` fetched at `pc`.
    pub const fn new(pc: u64, inst: u32) -> Self {
        Self { pc, inst }
    }
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// An illegal instruction still occupies the latch: the trap is taken when the
/// entry reaches the trap handler, not in decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Decode outcome.
    pub outcome: Result<DecodeResult, IllegalInstruction>,
}

/// Register selects driven onto the register-file read ports.
///
/// `None` means the port is not driven for this instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selects {
    /// First source port.
    pub rs1: Option<Port>,
    /// Second source port.
    pub rs2: Option<Port>,
    /// Third source port.
    pub rs3: Option<Port>,
}

/// A read port selection: which file and which register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    /// Integer register file.
    Int(u8),
    /// Floating-point register file.
    Float(u8),
}

/// Values read through the source ports. `None` for undriven ports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Value on the first source port.
    pub rv1: Option<u64>,
    /// Value on the second source port.
    pub rv2: Option<u64>,
    /// Value on the third source port.
    pub rv3: Option<u64>,
}

impl IdExEntry {
    /// True if the entry carries an illegal instruction.
    pub const fn is_trap(&self) -> bool {
        self.outcome.is_err()
    }

    /// The decode result, if the instruction was legal.
    pub const fn decoded(&self) -> Option<&DecodeResult> {
        match &self.outcome {
            Ok(d) => Some(d),
            Err(_) => None,
        }
    }

    /// Source register selects for this entry.
    ///
    /// Illegal entries drive no ports. Fields a format does not use (immediate
    /// operands, FP selector fields, the CSR `uimm`) are never selected.
    pub fn selects(&self) -> Selects {
        let Some(d) = self.decoded() else {
            return Selects::default();
        };
        let int = |r| Some(Port::Int(r));
        let float = |r| Some(Port::Float(r));

        match d.subcode {
            Some(OperationSubcode::Alu(op)) => Selects {
                rs1: int(d.rs1),
                rs2: if op.is_immediate() { None } else { int(d.rs2) },
                rs3: None,
            },
            Some(OperationSubcode::Mem(op)) => {
                let rs2 = match d.atomic {
                    Some(AtomicOp::Lr) => None,
                    Some(_) => int(d.rs2),
                    None if op.is_load() => None,
                    None if op.is_float() => float(d.rs2),
                    None => int(d.rs2),
                };
                Selects {
                    rs1: int(d.rs1),
                    rs2,
                    rs3: None,
                }
            }
            Some(OperationSubcode::Fpu(op)) => Selects {
                rs1: if op.reads_int() { int(d.rs1) } else { float(d.rs1) },
                rs2: if op.reads_rs2() { float(d.rs2) } else { None },
                rs3: if op.is_fused() { float(d.rs3) } else { None },
            },
            None => match (d.class, d.system) {
                (OpcodeClass::Branch, _) => Selects {
                    rs1: int(d.rs1),
                    rs2: int(d.rs2),
                    rs3: None,
                },
                (OpcodeClass::Jalr, _) => Selects {
                    rs1: int(d.rs1),
                    ..Selects::default()
                },
                (OpcodeClass::System, Some(op)) if op.is_csr() && !op.has_uimm() => Selects {
                    rs1: int(d.rs1),
                    ..Selects::default()
                },
                (OpcodeClass::System, Some(SystemOp::SfenceVma)) => Selects {
                    rs1: int(d.rs1),
                    rs2: int(d.rs2),
                    rs3: None,
                },
                _ => Selects::default(),
            },
        }
    }

    /// Reads the source operands through the register-file ports.
    pub fn read_operands(&self, regs: &RegisterFile) -> Operands {
        let read = |port: Option<Port>| match port? {
            Port::Int(r) => regs.read(Some(r)),
            Port::Float(r) => regs.read_f(Some(r)),
        };
        let sel = self.selects();
        Operands {
            rv1: read(sel.rs1),
            rv2: read(sel.rs2),
            rv3: read(sel.rs3),
        }
    }
}
