use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kira-compound-usage",
    version,
    about = "Compound usage tallies and group enrichment from genome annotations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    #[arg(long, help = "Single-column file of compound identifiers")]
    pub compounds: PathBuf,

    #[arg(long, help = "Annotation matrix TSV (rows = annotations, columns = genomes)")]
    pub annotations: PathBuf,

    #[arg(long, help = "Metadata TSV of genome<TAB>group assignments")]
    pub metadata: PathBuf,

    #[arg(
        long,
        env = "KIRA_USES_REFERENCE",
        help = "Directory holding reaction_to_enzyme.tsv, compound_to_reaction.tsv and compound_descriptions.tsv"
    )]
    pub reference: PathBuf,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(
        long,
        default_value_t = false,
        help = "Sum annotation copy numbers instead of counting supported reactions"
    )]
    pub count: bool,

    #[arg(long, default_value_t = false, help = "Also write uses_report.json")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}
