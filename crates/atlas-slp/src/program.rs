//! Program structure for straight-line programs.

use crate::instruction::{Instruction, Register};
use atlas_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::warn;

/// One raw entry of an `slp` array as stored in the data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlpRecord {
    /// `[target, src1, kind, src2OrExponent]`
    Step([i64; 4]),
    /// `[n]`: the output is generated by registers `1..=n`
    Marker([i64; 1]),
    /// Anything else found in the data
    Malformed(serde_json::Value),
}

/// Split a trailing generator-count marker off a record list.
///
/// Returns the remaining records and the count, if the last record was a
/// marker holding a non-negative count. Splitting the remainder again is a
/// no-op for any list whose last step is an instruction.
pub fn split_marker(records: &[SlpRecord]) -> (&[SlpRecord], Option<u32>) {
    if let Some((SlpRecord::Marker([n]), rest)) = records.split_last() {
        if let Ok(n) = u32::try_from(*n) {
            return (rest, Some(n));
        }
    }
    (records, None)
}

/// A decoded straight-line program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    /// Number of output generators, when the data gave one
    pub generator_count: Option<u32>,
}

impl Program {
    /// Output generator count assumed when the data carries no marker
    pub const DEFAULT_GENERATORS: u32 = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instructions(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            generator_count: None,
        }
    }

    pub fn with_generator_count(mut self, n: u32) -> Self {
        self.generator_count = Some(n);
        self
    }

    pub fn add_instruction(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of output generators
    pub fn ngens(&self) -> u32 {
        self.generator_count.unwrap_or(Self::DEFAULT_GENERATORS)
    }

    /// Registers `1..=n` holding the output generators
    pub fn output_registers(&self) -> impl Iterator<Item = Register> {
        (1..=self.ngens()).map(Register)
    }

    /// Decode raw records, skipping any that do not describe an instruction.
    pub fn from_records(records: &[SlpRecord]) -> Self {
        let decoded = Self::decode(records, |position, reason| {
            warn!(position, reason, "skipping SLP record");
            Ok::<(), Infallible>(())
        });
        match decoded {
            Ok(program) => program,
            Err(never) => match never {},
        }
    }

    /// Decode raw records, failing on the first one that does not describe
    /// an instruction.
    pub fn try_from_records(records: &[SlpRecord]) -> Result<Self> {
        Self::decode(records, |position, reason| {
            Err(Error::Validation(format!("SLP record {}: {}", position, reason)))
        })
    }

    /// Lenient decoding of a JSON `slp` array.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<SlpRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(&records))
    }

    /// Encode back into raw records, including a marker when the count is known.
    pub fn to_records(&self) -> Vec<SlpRecord> {
        let mut records: Vec<SlpRecord> = self
            .instructions
            .iter()
            .map(|inst| SlpRecord::Step(inst.to_fields()))
            .collect();
        if let Some(n) = self.generator_count {
            records.push(SlpRecord::Marker([n as i64]));
        }
        records
    }

    fn decode<E, F>(records: &[SlpRecord], mut reject: F) -> std::result::Result<Self, E>
    where
        F: FnMut(usize, &'static str) -> std::result::Result<(), E>,
    {
        let (steps, generator_count) = split_marker(records);
        let mut instructions = Vec::with_capacity(steps.len());

        for (position, record) in steps.iter().enumerate() {
            match record {
                SlpRecord::Step(fields) => match Instruction::from_fields(*fields) {
                    Some(inst) => instructions.push(inst),
                    None => reject(position, "register indices must be positive")?,
                },
                SlpRecord::Marker(_) => {
                    reject(position, "generator-count marker must be last and non-negative")?
                }
                SlpRecord::Malformed(_) => reject(position, "expected four integer fields")?,
            }
        }

        Ok(Self {
            instructions,
            generator_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<SlpRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_shapes() {
        let recs = records(json!([[3, 1, 0, 2], [4], [1, 2, 3], "x", [1.5]]));
        assert_eq!(recs[0], SlpRecord::Step([3, 1, 0, 2]));
        assert_eq!(recs[1], SlpRecord::Marker([4]));
        assert!(matches!(recs[2], SlpRecord::Malformed(_)));
        assert!(matches!(recs[3], SlpRecord::Malformed(_)));
        assert!(matches!(recs[4], SlpRecord::Malformed(_)));
    }

    #[test]
    fn test_split_marker() {
        let recs = records(json!([[3, 1, 0, 2], [4, 3, 5, 0], [3]]));
        let (rest, n) = split_marker(&recs);
        assert_eq!(n, Some(3));
        assert_eq!(rest.len(), 2);

        let (again, n) = split_marker(rest);
        assert_eq!(n, None);
        assert_eq!(again, rest);
    }

    #[test]
    fn test_split_marker_without_marker() {
        let recs = records(json!([[3, 1, 0, 2]]));
        assert_eq!(split_marker(&recs), (&recs[..], None));

        let empty: Vec<SlpRecord> = Vec::new();
        assert_eq!(split_marker(&empty), (&empty[..], None));
    }

    #[test]
    fn test_negative_marker_is_not_a_count() {
        let recs = records(json!([[3, 1, 0, 2], [-1]]));
        let (rest, n) = split_marker(&recs);
        assert_eq!(n, None);
        assert_eq!(rest.len(), 2);
        assert!(Program::try_from_records(&recs).is_err());
    }

    #[test]
    fn test_default_generator_count() {
        let program = Program::from_records(&records(json!([[3, 1, 0, 2]])));
        assert_eq!(program.generator_count, None);
        assert_eq!(program.ngens(), 2);
        assert_eq!(
            program.output_registers().collect::<Vec<_>>(),
            vec![Register(1), Register(2)]
        );
    }

    #[test]
    fn test_lenient_decoding_skips_malformed() {
        let recs = records(json!([[3, 1, 0, 2], [9, 9, 9], [2, 0, 1, 2], [4], [4, 3, 1, -1], [3]]));
        let program = Program::from_records(&recs);
        assert_eq!(
            program.instructions,
            vec![Instruction::product(3, 1, 2), Instruction::power(4, 3, -1)]
        );
        assert_eq!(program.ngens(), 3);
    }

    #[test]
    fn test_strict_decoding_reports_position() {
        let recs = records(json!([[3, 1, 0, 2], [9, 9, 9]]));
        let err = Program::try_from_records(&recs).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: SLP record 1: expected four integer fields"
        );
    }

    #[test]
    fn test_to_records() {
        let program = Program::with_instructions(vec![Instruction::product(3, 1, 2)])
            .with_generator_count(2);
        assert_eq!(
            program.to_records(),
            vec![SlpRecord::Step([3, 1, 0, 2]), SlpRecord::Marker([2])]
        );
        assert_eq!(Program::from_records(&program.to_records()), program);
    }

    #[test]
    fn test_from_json() {
        let program = Program::from_json("[[3,1,0,2],[4,3,5,0],[2]]").unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(program.generator_count, Some(2));
        assert!(Program::from_json("{}").is_err());
    }
}
