//! Download file names for exported data.

use crate::types::TargetFormat;

/// Extension for a format's download file. Meataxe scripts carry none.
pub fn file_extension(format: &TargetFormat) -> Option<&'static str> {
    match format {
        TargetFormat::Magma => Some("m"),
        TargetFormat::Gap => Some("g"),
        TargetFormat::Meataxe => None,
        TargetFormat::Text | TargetFormat::Unsupported(_) => Some("txt"),
    }
}

/// Prefix shared by every maximal subgroup of a group: the group data id
/// without its `_maxes...` suffix, followed by `_`. Falls back to `G_`.
pub fn group_prefix(group_id: Option<&str>) -> String {
    match group_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let base = id.find("_maxes").map_or(id, |at| &id[..at]);
            format!("{}_", base)
        }
        None => "G_".to_string(),
    }
}

fn with_extension(stem: String, format: &TargetFormat) -> String {
    match file_extension(format) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

pub fn maximal_filename(group_id: Option<&str>, subgroup_id: &str, format: &TargetFormat) -> String {
    with_extension(format!("{}{}", group_prefix(group_id), subgroup_id), format)
}

pub fn representation_filename(rep_id: &str, format: &TargetFormat) -> String {
    with_extension(rep_id.to_string(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_prefix() {
        assert_eq!(group_prefix(Some("M11_maxes")), "M11_");
        assert_eq!(group_prefix(Some("M11_maxes_v2")), "M11_");
        assert_eq!(group_prefix(Some("A5")), "A5_");
        assert_eq!(group_prefix(Some("")), "G_");
        assert_eq!(group_prefix(None), "G_");
    }

    #[test]
    fn test_maximal_filename() {
        assert_eq!(
            maximal_filename(Some("M11_maxes_v2"), "M11max1", &TargetFormat::Magma),
            "M11_M11max1.m"
        );
        assert_eq!(
            maximal_filename(Some("M11_maxes"), "M11max2", &TargetFormat::Gap),
            "M11_M11max2.g"
        );
        assert_eq!(
            maximal_filename(None, "max3", &TargetFormat::Meataxe),
            "G_max3"
        );
        assert_eq!(
            maximal_filename(Some("J1_maxes"), "J1max4", &TargetFormat::Text),
            "J1_J1max4.txt"
        );
    }

    #[test]
    fn test_representation_filename() {
        assert_eq!(representation_filename("M11G1-p11B0", &TargetFormat::Magma), "M11G1-p11B0.m");
        assert_eq!(
            representation_filename("M11G1-f2r10B0", &TargetFormat::Unsupported("Foo".into())),
            "M11G1-f2r10B0.txt"
        );
    }
}
