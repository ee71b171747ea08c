//! Meataxe register-machine emitter.

use crate::compiler::Emitter;
use crate::instruction::Instruction;
use crate::program::Program;
use atlas_core::EmissionContext;

/// Emits the program as a Meataxe script: inputs `g.i` are copied into
/// registers `zi`, the steps run as `zmu`/`ziv`/`zpo` operations and the
/// outputs are copied to `h.i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeataxeEmitter;

impl Emitter for MeataxeEmitter {
    fn emit(&self, program: &Program, context: &EmissionContext) -> String {
        let mut lines = vec![
            format!(
                "# Online Atlas of Group Representations, version {}.",
                context.version_label()
            ),
            "#".to_string(),
            "# Straight-line program for maximal subgroup generator.".to_string(),
            "#".to_string(),
            format!("# {}.", context.relation()),
            format!("# {}", context.order_index_line()),
        ];

        if let Some(sources) = context.sources_text() {
            for line in sources.split('\n') {
                lines.push(format!("# {}", line.strip_suffix('\r').unwrap_or(line)));
            }
        }

        lines.push(String::new());

        for reg in program.output_registers() {
            lines.push(format!("cp g.{} z{}", reg, reg));
        }

        for inst in &program.instructions {
            lines.push(match *inst {
                Instruction::Product { target, left, right } => {
                    format!("zmu z{} z{} z{}", left, right, target)
                }
                Instruction::Power { target, base, exponent: -1 } => {
                    format!("ziv z{} z{}", base, target)
                }
                Instruction::Power { target, base, exponent } => {
                    format!("zpo z{} {} z{}", base, exponent, target)
                }
            });
        }

        for reg in program.output_registers() {
            lines.push(format!("cp z{} h.{}", reg, reg));
        }

        lines.join("\n")
    }
}
