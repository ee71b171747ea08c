//! Permutation representations.

use crate::Representation;
use atlas_core::{optional_decimal, Result, TargetFormat, UNKNOWN_VERSION};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A permutation representation as stored in `perm/<id>.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermutationRep {
    pub id: String,
    pub name: Option<String>,
    pub atlas_version: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub rank: Option<serde_json::Value>,
    pub suborbit_lengths: Option<Vec<serde_json::Value>>,
    pub sources: Option<String>,
    pub degree: u64,
    #[serde(default)]
    pub generators: PermutationGenerators,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermutationGenerators {
    /// Image lists of the points `1..=degree`, one per generator
    #[serde(default)]
    pub array: Vec<Vec<u64>>,
}

impl PermutationRep {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_magma(&self) -> String {
        let name = self.title();
        let mut lines = vec![
            "/*".to_string(),
            format!(
                "Online Atlas of Group Representations, version {}.",
                self.atlas_version.as_deref().unwrap_or(UNKNOWN_VERSION)
            ),
            String::new(),
            format!("{}.", name),
            String::new(),
            format!("Type: {}", self.kind.as_deref().unwrap_or_default()),
        ];

        if let Some(rank) = &self.rank {
            lines.push(format!("Rank: {}", optional_decimal(Some(rank))));
        }
        if let Some(lengths) = &self.suborbit_lengths {
            let lengths: Vec<String> = lengths.iter().map(|l| optional_decimal(Some(l))).collect();
            lines.push(format!("Suborbit lengths: [{}]", lengths.join(",")));
        }
        if let Some(sources) = self.sources.as_deref().filter(|s| !s.is_empty()) {
            lines.push(String::new());
            lines.push(sources.to_string());
        }
        lines.push("*/".to_string());
        lines.push(String::new());

        lines.push(format!("G<x,y>:=PermutationGroup<{}|", self.degree));

        let generators: Vec<String> = self
            .generators
            .array
            .iter()
            .map(|images| {
                let images: Vec<String> = images.iter().map(|p| p.to_string()).collect();
                format!("\\[{}]", images.join(","))
            })
            .collect();
        lines.push(format!("{}>;", generators.join(",\n")));
        lines.push(format!(
            "print \"Group G is {} < Sym({})\";",
            name, self.degree
        ));

        lines.join("\n")
    }
}

impl Representation for PermutationRep {
    fn id(&self) -> &str {
        &self.id
    }

    fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn render(&self, format: &TargetFormat) -> String {
        debug!(rep = %self.id, %format, "rendering permutation representation");
        match format {
            TargetFormat::Magma => self.to_magma(),
            other => other.not_implemented(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const M11_ON_11: &str = r#"{
        "id": "M11G1-p11B0",
        "name": "$M_{11}$ on 11 points",
        "atlas_version": "3",
        "type": "primitive",
        "rank": 2,
        "suborbit_lengths": [1, 10],
        "sources": "Generators from the ATLAS.",
        "degree": 11,
        "generators": {
            "array": [
                [2, 10, 4, 3, 9, 6, 7, 8, 5, 1, 11],
                [1, 6, 5, 2, 4, 3, 7, 8, 9, 10, 11]
            ]
        }
    }"#;

    #[test]
    fn test_magma_layout() {
        let rep = PermutationRep::from_json(M11_ON_11).unwrap();
        let expected = indoc! {r#"
            /*
            Online Atlas of Group Representations, version 3.

            M_{11} on 11 points.

            Type: primitive
            Rank: 2
            Suborbit lengths: [1,10]

            Generators from the ATLAS.
            */

            G<x,y>:=PermutationGroup<11|
            \[2,10,4,3,9,6,7,8,5,1,11],
            \[1,6,5,2,4,3,7,8,9,10,11]>;
            print "Group G is M_{11} on 11 points < Sym(11)";"#};

        assert_eq!(rep.render(&TargetFormat::Magma), expected);
    }

    #[test]
    fn test_magma_minimal_record() {
        let rep = PermutationRep::from_json(r#"{"id": "A5G1-p5B0", "name": "$A_5$", "degree": 5}"#)
            .unwrap();
        let out = rep.render(&TargetFormat::Magma);
        assert!(out.starts_with("/*\nOnline Atlas of Group Representations, version unknown.\n\nA_5.\n\nType: \n*/\n\n"));
        assert!(out.ends_with("G<x,y>:=PermutationGroup<5|\n>;\nprint \"Group G is A_5 < Sym(5)\";"));
    }

    #[test]
    fn test_unsupported_format() {
        let rep = PermutationRep::from_json(M11_ON_11).unwrap();
        assert_eq!(rep.render(&TargetFormat::Gap), "Format GAP not implemented yet.");
        assert_eq!(rep.filename(&TargetFormat::Gap), "M11G1-p11B0.g");
    }
}
