use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atlas-export", bin_name = "atlas-export", version)]
#[command(about = "Export Atlas of Group Representations data for computer algebra systems")]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export the straight-line program of a maximal subgroup
    #[command(after_help = r#"EXAMPLES:
  atlas-export maximal M11_maxes.json --index 0
  atlas-export maximal M11_maxes.json --id M11max2 -f Meataxe --out-dir slp/
  atlas-export maximal M11_maxes.json --index 1 -f Text --html -o view.html"#)]
    Maximal {
        /// Maximal subgroups file (`<group>_maxes.json`)
        file: PathBuf,

        #[command(flatten)]
        select: SubgroupSelector,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Export a matrix representation
    Linear {
        /// Representation file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Export a permutation representation
    Permutation {
        /// Representation file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Strictly decode and validate every program in a maximal subgroups file
    Check {
        /// Maximal subgroups file
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SubgroupSelector {
    /// Position of the subgroup in the file, starting at 0
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Id of the subgroup (e.g. M11max1)
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: Magma, GAP, Meataxe or Text
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write to the download file name inside this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Wrap the export in a standalone HTML page
    #[arg(long)]
    pub html: bool,
}
