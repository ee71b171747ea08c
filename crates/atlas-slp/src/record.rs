//! Maximal subgroup data as published alongside each group page.

use crate::compiler::Compiler;
use crate::program::{Program, SlpRecord};
use atlas_core::{optional_decimal, strip_math_delimiters, EmissionContext, Result, TargetFormat};
use serde::{Deserialize, Serialize};

/// Contents of a `<group>_maxes.json` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaximalsInfo {
    pub id: Option<String>,
    /// Display name of the ambient group, possibly with `$...$` math
    pub group: Option<String>,
    pub atlas_version: Option<String>,
    pub sources: Option<String>,
    #[serde(default)]
    pub maximals: Vec<MaximalSubgroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaximalSubgroup {
    pub id: String,
    pub name: Option<String>,
    pub order: Option<serde_json::Value>,
    pub index: Option<serde_json::Value>,
    #[serde(default)]
    pub slp: Vec<SlpRecord>,
    pub maximal_small_group: Option<Vec<u64>>,
}

impl MaximalsInfo {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find(&self, id: &str) -> Option<&MaximalSubgroup> {
        self.maximals.iter().find(|m| m.id == id)
    }

    pub fn group_name(&self) -> String {
        strip_math_delimiters(self.group.as_deref().unwrap_or_default())
    }
}

impl MaximalSubgroup {
    pub fn has_program(&self) -> bool {
        !self.slp.is_empty()
    }

    pub fn display_name(&self) -> String {
        strip_math_delimiters(self.name.as_deref().unwrap_or_default())
    }

    /// Lenient decoding of the stored program.
    pub fn program(&self) -> Program {
        Program::from_records(&self.slp)
    }

    /// Strict decoding of the stored program.
    pub fn try_program(&self) -> Result<Program> {
        Program::try_from_records(&self.slp)
    }

    pub fn context(&self, info: &MaximalsInfo) -> EmissionContext {
        EmissionContext {
            atlas_version: info.atlas_version.clone(),
            group_id: info.id.clone(),
            group_name: info.group_name(),
            subgroup_id: self.id.clone(),
            subgroup_name: self.display_name(),
            order: optional_decimal(self.order.as_ref()),
            index: optional_decimal(self.index.as_ref()),
            sources: info.sources.clone(),
        }
    }

    /// `SmallGroup(n,k)` when the subgroup has a small-group id.
    pub fn small_group_label(&self) -> Option<String> {
        match self.maximal_small_group.as_deref() {
            Some([n, k]) => Some(format!("SmallGroup({},{})", n, k)),
            _ => None,
        }
    }
}

/// Render a maximal subgroup's program with the built-in emitters.
pub fn export_maximal(info: &MaximalsInfo, max: &MaximalSubgroup, target: &TargetFormat) -> String {
    Compiler::new().render(&max.program(), &max.context(info), target)
}
