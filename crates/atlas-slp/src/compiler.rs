//! Compiler from straight-line programs to text formats.

use crate::magma::MagmaEmitter;
use crate::meataxe::MeataxeEmitter;
use crate::narrative::NarrativeEmitter;
use crate::program::Program;
use atlas_core::{EmissionContext, TargetFormat};
use std::collections::HashMap;
use tracing::debug;

/// A renderer for one target format.
pub trait Emitter: Send + Sync {
    fn emit(&self, program: &Program, context: &EmissionContext) -> String;
}

/// `w1, w2, ..., wn` for the program's output registers.
pub(crate) fn generator_list(program: &Program) -> String {
    program
        .output_registers()
        .map(|r| format!("w{}", r))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Dispatches programs to the emitter registered for a format.
pub struct Compiler {
    emitters: HashMap<TargetFormat, Box<dyn Emitter>>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// A compiler with the Magma, Meataxe and Text emitters registered.
    pub fn new() -> Self {
        Self::empty()
            .with_emitter(TargetFormat::Magma, MagmaEmitter)
            .with_emitter(TargetFormat::Meataxe, MeataxeEmitter)
            .with_emitter(TargetFormat::Text, NarrativeEmitter)
    }

    /// A compiler with no emitters; every format renders the placeholder.
    pub fn empty() -> Self {
        Self {
            emitters: HashMap::new(),
        }
    }

    pub fn with_emitter(mut self, format: TargetFormat, emitter: impl Emitter + 'static) -> Self {
        self.emitters.insert(format, Box::new(emitter));
        self
    }

    pub fn supports(&self, format: &TargetFormat) -> bool {
        self.emitters.contains_key(format)
    }

    /// Render `program` in `target`. Formats without an emitter yield
    /// `Format <target> not implemented yet.` instead of an error.
    pub fn render(&self, program: &Program, context: &EmissionContext, target: &TargetFormat) -> String {
        match self.emitters.get(target) {
            Some(emitter) => {
                debug!(
                    format = %target,
                    instructions = program.len(),
                    ngens = program.ngens(),
                    "rendering straight-line program"
                );
                emitter.emit(program, context)
            }
            None => {
                debug!(format = %target, "no emitter registered");
                target.not_implemented()
            }
        }
    }
}

/// Render with the built-in emitters.
pub fn render(program: &Program, context: &EmissionContext, target: &TargetFormat) -> String {
    Compiler::new().render(program, context, target)
}
