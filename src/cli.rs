use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "governance.toml";

#[derive(Parser, Debug)]
#[command(name = "govgate", version, about = "Governance gate for ML pipeline artifacts")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root that relative artifact paths resolve against"
    )]
    pub root: String,
    #[arg(
        long,
        global = true,
        help = "Governance config file (defaults to <root>/governance.toml when present)"
    )]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess inputs, decide, and write the governance report
    Evaluate {
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        #[arg(long, value_enum)]
        lang: Option<ReportLang>,
        #[arg(long, help = "Override the report output path")]
        output: Option<String>,
    },
    /// Assess inputs and print the verdict without writing a report
    Check {
        #[arg(long, value_enum)]
        lang: Option<ReportLang>,
    },
    /// Inspect resolved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print resolved paths, threshold and report settings
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Markdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportLang {
    #[default]
    En,
    Tr,
}
