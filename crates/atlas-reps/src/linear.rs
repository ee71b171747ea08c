//! Matrix representations over finite fields.

use crate::Representation;
use atlas_core::{extract_first_math_fragment, optional_decimal, Result, TargetFormat, UNKNOWN_VERSION};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest field order whose entries fit in one character per column
const COMPACT_FIELD_LIMIT: u64 = 9;

/// A matrix representation as stored in `lin/<id>.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRep {
    pub id: String,
    pub name: Option<String>,
    pub atlas_version: Option<String>,
    pub irreducibility: Option<String>,
    #[serde(rename = "1-cohomology")]
    pub cohomology_1: Option<serde_json::Value>,
    #[serde(rename = "2-cohomology")]
    pub cohomology_2: Option<serde_json::Value>,
    pub sources: Option<String>,
    pub characteristic: Option<u64>,
    /// Field order q of GF(q)
    pub field: u64,
    pub dimension: u64,
    /// Generator matrices, row by row
    #[serde(default)]
    pub values: Vec<Vec<Vec<u64>>>,
}

impl LinearRep {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Matrix as a `CambridgeMatrix` call: tag 1 packs each row into a
    /// digit string for small fields, tag 3 lists comma-separated entries.
    fn cambridge_matrix(&self, matrix: &[Vec<u64>]) -> String {
        if self.field <= COMPACT_FIELD_LIMIT {
            let rows: Vec<String> = matrix
                .iter()
                .map(|row| format!("\"{}\"", join(row, "")))
                .collect();
            format!(
                "CambridgeMatrix(1,F,{},[\n  {}\n])",
                self.dimension,
                rows.join(",\n  ")
            )
        } else {
            let rows: Vec<String> = matrix
                .iter()
                .map(|row| format!("  {}", join(row, ",")))
                .collect();
            format!(
                "CambridgeMatrix(3,F,{},[\n{}\n])",
                self.dimension,
                rows.join(",\n")
            )
        }
    }

    pub fn to_magma(&self) -> String {
        let mut lines = vec![
            "/*".to_string(),
            format!(
                "Online Atlas of Group Representations, version {}.",
                self.atlas_version.as_deref().unwrap_or(UNKNOWN_VERSION)
            ),
            String::new(),
            self.title(),
            String::new(),
            format!("Type: {}.", self.irreducibility.as_deref().unwrap_or_default()),
        ];

        if self.cohomology_1.is_some() {
            lines.push(format!(
                "1-cohomology dimension: {}.",
                optional_decimal(self.cohomology_1.as_ref())
            ));
        }
        if self.cohomology_2.is_some() {
            lines.push(format!(
                "2-cohomology dimension: {}.",
                optional_decimal(self.cohomology_2.as_ref())
            ));
        }

        lines.push(String::new());
        lines.push(self.sources.clone().unwrap_or_default());
        lines.push("*/\n".to_string());

        lines.push(format!("F:=GF({});", self.field));
        lines.push(String::new());
        lines.push(format!("G:=MatrixGroup<{},F|", self.dimension));

        let blocks: Vec<String> = self
            .values
            .iter()
            .map(|matrix| self.cambridge_matrix(matrix))
            .collect();
        lines.push(blocks.join(",\n"));
        lines.push(">;".to_string());
        lines.push(format!(
            "print \"Group G is {} < GL({},{})\";",
            extract_first_math_fragment(self.name.as_deref().unwrap_or_default()),
            self.dimension,
            self.field
        ));

        lines.join("\n")
    }
}

impl Representation for LinearRep {
    fn id(&self) -> &str {
        &self.id
    }

    fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn render(&self, format: &TargetFormat) -> String {
        debug!(rep = %self.id, %format, "rendering linear representation");
        match format {
            TargetFormat::Magma => self.to_magma(),
            other => other.not_implemented(),
        }
    }
}

fn join(values: &[u64], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
