//! Instruction set for straight-line programs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Register index. Registers 1 and 2 hold the standard generators of the
/// ambient group before the first instruction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Register(pub u32);

impl Register {
    /// Number of registers defined before the program starts
    pub const SEEDS: u32 = 2;

    /// Build a register from a raw data field; indices start at 1.
    pub fn from_field(field: i64) -> Option<Self> {
        u32::try_from(field).ok().filter(|&i| i >= 1).map(Register)
    }

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn is_seed(self) -> bool {
        (1..=Self::SEEDS).contains(&self.0)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single step of a straight-line program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// `target := left * right`
    Product {
        target: Register,
        left: Register,
        right: Register,
    },
    /// `target := base ^ exponent`; an exponent of `-1` is the inverse
    Power {
        target: Register,
        base: Register,
        exponent: i64,
    },
}

impl Instruction {
    pub fn product(target: u32, left: u32, right: u32) -> Self {
        Instruction::Product {
            target: Register(target),
            left: Register(left),
            right: Register(right),
        }
    }

    pub fn power(target: u32, base: u32, exponent: i64) -> Self {
        Instruction::Power {
            target: Register(target),
            base: Register(base),
            exponent,
        }
    }

    /// Decode the raw `[target, src1, kind, src2OrExponent]` record.
    ///
    /// A `kind` of zero selects a product with `src2OrExponent` as the second
    /// register; any other value selects a power and the last field is the
    /// exponent. Returns `None` when a register field is not a valid index.
    pub fn from_fields([target, src, kind, operand]: [i64; 4]) -> Option<Self> {
        let target = Register::from_field(target)?;
        let src = Register::from_field(src)?;

        if kind == 0 {
            Some(Instruction::Product {
                target,
                left: src,
                right: Register::from_field(operand)?,
            })
        } else {
            Some(Instruction::Power {
                target,
                base: src,
                exponent: operand,
            })
        }
    }

    /// Encode back into the raw record shape (`kind` is `1` for powers).
    pub fn to_fields(&self) -> [i64; 4] {
        match *self {
            Instruction::Product { target, left, right } => {
                [target.0 as i64, left.0 as i64, 0, right.0 as i64]
            }
            Instruction::Power { target, base, exponent } => {
                [target.0 as i64, base.0 as i64, 1, exponent]
            }
        }
    }

    pub fn target(&self) -> Register {
        match *self {
            Instruction::Product { target, .. } | Instruction::Power { target, .. } => target,
        }
    }

    /// Registers read by this instruction, in operand order
    pub fn sources(&self) -> Vec<Register> {
        match *self {
            Instruction::Product { left, right, .. } => vec![left, right],
            Instruction::Power { base, .. } => vec![base],
        }
    }

    pub fn is_inverse(&self) -> bool {
        matches!(self, Instruction::Power { exponent: -1, .. })
    }
}
