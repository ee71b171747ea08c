//! Magma function emitter.

use crate::compiler::{generator_list, Emitter};
use crate::instruction::Instruction;
use crate::program::Program;
use atlas_core::{group_prefix, EmissionContext};

/// Emits the program as a Magma function `<group>_<subgroup>(G)` returning
/// the subgroup generated by the output registers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagmaEmitter;

impl Emitter for MagmaEmitter {
    fn emit(&self, program: &Program, context: &EmissionContext) -> String {
        let mut lines = vec![
            "/*".to_string(),
            format!(
                "Online Atlas of Group Representations, version {}.",
                context.version_label()
            ),
            String::new(),
            "Straight-line program for maximal subgroup generator.".to_string(),
            String::new(),
            format!("{}.", context.relation()),
            String::new(),
            context.order_index_line(),
        ];

        if let Some(sources) = context.sources_text() {
            lines.push(String::new());
            lines.push(sources.to_string());
        }

        lines.push("*/".to_string());
        lines.push(String::new());

        lines.push(format!(
            "function {}{}(G)",
            group_prefix(context.group_id.as_deref()),
            context.subgroup_id
        ));
        lines.push(String::new());
        lines.push("w1 := G.1; w2 := G.2;".to_string());

        for inst in &program.instructions {
            lines.push(match *inst {
                Instruction::Product { target, left, right } => {
                    format!("w{} := w{} * w{};", target, left, right)
                }
                Instruction::Power { target, base, exponent } => {
                    format!("w{} := w{} ^ {};", target, base, exponent)
                }
            });
        }

        lines.push(String::new());
        lines.push(format!("return sub<G |[{}]>;", generator_list(program)));
        lines.push(String::new());
        lines.push("end function;".to_string());

        lines.join("\n")
    }
}
