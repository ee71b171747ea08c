//! Core type definitions shared by the emitters.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label used in headers when the data carries no atlas version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Output format requested by the user.
///
/// Parsing never fails: selector values the exporters do not know are kept as
/// [`TargetFormat::Unsupported`] so the renderer can answer with its
/// placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetFormat {
    #[default]
    Magma,
    Gap,
    Meataxe,
    Text,
    Unsupported(String),
}

impl TargetFormat {
    /// Selector text as it appears in the format menus.
    pub fn as_str(&self) -> &str {
        match self {
            TargetFormat::Magma => "Magma",
            TargetFormat::Gap => "GAP",
            TargetFormat::Meataxe => "Meataxe",
            TargetFormat::Text => "Text",
            TargetFormat::Unsupported(name) => name,
        }
    }

    /// Placeholder returned for formats without an emitter.
    pub fn not_implemented(&self) -> String {
        format!("Format {} not implemented yet.", self.as_str())
    }
}

impl FromStr for TargetFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Magma" => TargetFormat::Magma,
            "GAP" => TargetFormat::Gap,
            "Meataxe" => TargetFormat::Meataxe,
            "Text" => TargetFormat::Text,
            other => TargetFormat::Unsupported(other.to_string()),
        })
    }
}

impl From<String> for TargetFormat {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(format) => format,
            Err(never) => match never {},
        }
    }
}

impl From<TargetFormat> for String {
    fn from(format: TargetFormat) -> Self {
        format.as_str().to_string()
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata printed around a straight-line program.
///
/// Names are display names with math delimiters already stripped; `order` and
/// `index` are verbatim decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionContext {
    pub atlas_version: Option<String>,
    /// Data id of the ambient group file (e.g. `M11_maxes`)
    pub group_id: Option<String>,
    pub group_name: String,
    pub subgroup_id: String,
    pub subgroup_name: String,
    pub order: String,
    pub index: String,
    pub sources: Option<String>,
}

impl EmissionContext {
    pub fn new(group_name: impl Into<String>, subgroup_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            subgroup_name: subgroup_name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.atlas_version = Some(version.into());
        self
    }

    pub fn with_ids(mut self, group_id: impl Into<String>, subgroup_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self.subgroup_id = subgroup_id.into();
        self
    }

    pub fn with_order_index(mut self, order: impl Into<String>, index: impl Into<String>) -> Self {
        self.order = order.into();
        self.index = index.into();
        self
    }

    pub fn with_sources(mut self, sources: impl Into<String>) -> Self {
        self.sources = Some(sources.into());
        self
    }

    pub fn version_label(&self) -> &str {
        self.atlas_version.as_deref().unwrap_or(UNKNOWN_VERSION)
    }

    /// Attribution text, treating an empty string as absent.
    pub fn sources_text(&self) -> Option<&str> {
        self.sources.as_deref().filter(|s| !s.is_empty())
    }

    /// `<subgroup> < <group>`
    pub fn relation(&self) -> String {
        format!("{} < {}", self.subgroup_name, self.group_name)
    }

    pub fn order_index_line(&self) -> String {
        format!("Order: {}, Index: {}", self.order, self.index)
    }
}

/// Render a JSON scalar as plain decimal text.
///
/// Integers print verbatim, whole floats drop their fractional part, strings
/// are taken as-is and `null` renders empty.
pub fn decimal_string(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.to_string()
            } else if let Some(i) = n.as_i64() {
                i.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
                        format!("{:.0}", f)
                    }
                    _ => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

/// Like [`decimal_string`] for an optional field.
pub fn optional_decimal(value: Option<&serde_json::Value>) -> String {
    value.map(decimal_string).unwrap_or_default()
}
