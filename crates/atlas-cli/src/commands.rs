//! Command implementations.

use crate::cli::{OutputArgs, SubgroupSelector};
use anyhow::{anyhow, bail, Context, Result};
use atlas_core::{maximal_filename, view_page, ExportConfig, TargetFormat};
use atlas_reps::Representation;
use atlas_slp::{export_maximal, validate_program, MaximalSubgroup, MaximalsInfo};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where a rendered export ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Output settings after merging command-line flags over the config file.
#[derive(Debug, Clone)]
pub struct OutputPlan {
    pub format: TargetFormat,
    pub html: bool,
    output: Option<PathBuf>,
    out_dir: Option<PathBuf>,
}

impl OutputPlan {
    pub fn new(args: &OutputArgs, config: &ExportConfig) -> Self {
        let format = match &args.format {
            Some(name) => TargetFormat::from(name.clone()),
            None => config.default_format.clone(),
        };
        // an explicit -o wins over a configured directory
        let out_dir = match args.output {
            Some(_) => None,
            None => args.out_dir.clone().or_else(|| config.output_dir.clone()),
        };
        Self {
            format,
            html: args.html || config.html,
            output: args.output.clone(),
            out_dir,
        }
    }

    /// `filename` is only consulted when writing into an output directory.
    pub fn destination(&self, filename: impl FnOnce() -> String) -> Destination {
        match (&self.output, &self.out_dir) {
            (Some(path), _) => Destination::File(path.clone()),
            (None, Some(dir)) => {
                let mut name = filename();
                if self.html {
                    name.push_str(".html");
                }
                Destination::File(dir.join(name))
            }
            (None, None) => Destination::Stdout,
        }
    }

    /// Write `text`, wrapped in a view page titled `title` when requested.
    pub fn deliver(&self, title: &str, text: &str, filename: impl FnOnce() -> String) -> Result<Destination> {
        let body = if self.html {
            view_page(title, text)
        } else {
            text.to_string()
        };

        let destination = self.destination(filename);
        match &destination {
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", body).context("Failed to write to stdout")?;
            }
            Destination::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                std::fs::write(path, body)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {}", path.display());
            }
        }
        Ok(destination)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn select<'a>(info: &'a MaximalsInfo, selector: &SubgroupSelector) -> Result<&'a MaximalSubgroup> {
    match (selector.index, selector.id.as_deref()) {
        (Some(index), _) => info.maximals.get(index).ok_or_else(|| {
            anyhow!(
                "Index {} out of range: the file lists {} maximal subgroups",
                index,
                info.maximals.len()
            )
        }),
        (None, Some(id)) => info
            .find(id)
            .ok_or_else(|| anyhow!("No maximal subgroup with id {}", id)),
        (None, None) => bail!("Select a subgroup with --index or --id"),
    }
}

pub fn run_maximal(
    file: &Path,
    selector: &SubgroupSelector,
    args: &OutputArgs,
    config: &ExportConfig,
) -> Result<Destination> {
    let info: MaximalsInfo = read_json(file)?;
    let max = select(&info, selector)?;
    let plan = OutputPlan::new(args, config);

    if !max.has_program() {
        warn!(subgroup = %max.id, "no straight-line program stored for this subgroup");
    }
    info!(subgroup = %max.id, format = %plan.format, "Exporting maximal subgroup");

    let text = export_maximal(&info, max, &plan.format);
    let title = format!("Maximal subgroup {} < {}", max.display_name(), info.group_name());
    plan.deliver(&title, &text, || {
        maximal_filename(info.id.as_deref(), &max.id, &plan.format)
    })
}

pub fn run_representation<R>(file: &Path, args: &OutputArgs, config: &ExportConfig) -> Result<Destination>
where
    R: Representation + DeserializeOwned,
{
    let rep: R = read_json(file)?;
    let plan = OutputPlan::new(args, config);

    info!(rep = %rep.id(), format = %plan.format, "Exporting representation");

    let text = rep.render(&plan.format);
    plan.deliver(&rep.title(), &text, || rep.filename(&plan.format))
}

/// Strictly decode and validate every stored program; returns the number
/// of subgroups checked.
pub fn run_check(file: &Path) -> Result<usize> {
    let info: MaximalsInfo = read_json(file)?;
    let mut failures = 0usize;
    let mut checked = 0usize;

    for max in info.maximals.iter().filter(|m| m.has_program()) {
        checked += 1;
        let result = max.try_program().and_then(|program| validate_program(&program));
        match result {
            Ok(()) => info!(subgroup = %max.id, "ok"),
            Err(e) => {
                failures += 1;
                warn!(subgroup = %max.id, error = %e, "invalid straight-line program");
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} straight-line programs failed validation", failures, checked);
    }
    Ok(checked)
}
