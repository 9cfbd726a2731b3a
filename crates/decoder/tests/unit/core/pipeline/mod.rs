//! Decode stage tests.


/// Register selects and operand reads driven by ID/EX entries.
pub mod operand_select;
