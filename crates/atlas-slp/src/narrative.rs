//! Plain-text narrative emitter.

use crate::compiler::{generator_list, Emitter};
use crate::instruction::Instruction;
use crate::program::Program;
use atlas_core::EmissionContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeEmitter;

impl Emitter for NarrativeEmitter {
    fn emit(&self, program: &Program, context: &EmissionContext) -> String {
        let ngens = program.ngens();
        let initial = if ngens > 2 {
            format!("w1, w2, …, w{}", ngens)
        } else {
            "w1, w2".to_string()
        };

        let mut lines = vec![
            "Straight-line program for a maximal subgroup.".to_string(),
            format!("{}.", context.relation()),
            context.order_index_line(),
            String::new(),
            format!("Initial generators: {}", initial),
            String::new(),
        ];

        for inst in &program.instructions {
            lines.push(match *inst {
                Instruction::Product { target, left, right } => {
                    format!("Set w{} = w{} · w{}.", target, left, right)
                }
                Instruction::Power { target, base, exponent } => {
                    format!("Set w{} = w{}^{}.", target, base, exponent)
                }
            });
        }

        lines.push(String::new());
        lines.push(format!(
            "The maximal subgroup is generated by {}.",
            generator_list(program)
        ));

        lines.join("\n")
    }
}
