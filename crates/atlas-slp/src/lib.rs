//! Straight-line programs for Atlas maximal subgroups.
//!
//! A straight-line program (SLP) builds generators of a subgroup from the two
//! standard generators of the ambient group, one product or power at a time.
//! This crate decodes the SLPs stored in the atlas data files and renders
//! them for external algebra systems:
//! - Magma: a function returning the subgroup
//! - Meataxe: a register-machine script
//! - Text: a step-by-step description

pub mod instruction;
pub mod program;
pub mod compiler;
pub mod magma;
pub mod meataxe;
pub mod narrative;
pub mod record;
pub mod validation;

pub use instruction::{Instruction, Register};
pub use program::{split_marker, Program, SlpRecord};
pub use compiler::{render, Compiler, Emitter};
pub use magma::MagmaEmitter;
pub use meataxe::MeataxeEmitter;
pub use narrative::NarrativeEmitter;
pub use record::{export_maximal, MaximalSubgroup, MaximalsInfo};
pub use validation::validate_program;
