//! Validation for straight-line programs.

use crate::instruction::Register;
use crate::program::Program;
use atlas_core::{Error, Result};
use std::collections::HashSet;

/// Validate that a program only reads registers that already hold a value
/// and that every output register is defined by the end.
pub fn validate_program(program: &Program) -> Result<()> {
    let mut defined: HashSet<Register> = (1..=Register::SEEDS).map(Register).collect();

    for (idx, inst) in program.instructions.iter().enumerate() {
        for src in inst.sources() {
            if !defined.contains(&src) {
                return Err(Error::Validation(format!(
                    "Instruction {} reads w{} before it is defined",
                    idx, src
                )));
            }
        }
        defined.insert(inst.target());
    }

    if let Some(missing) = program.output_registers().find(|r| !defined.contains(r)) {
        return Err(Error::Validation(format!(
            "Output generator w{} is never defined",
            missing
        )));
    }

    Ok(())
}
