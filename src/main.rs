use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_compound_usage::cli::{Cli, Commands, InputArgs};
use kira_compound_usage::ctx::{Ctx, InputPaths};
use kira_compound_usage::io;
use kira_compound_usage::pipeline::Pipeline;
use kira_compound_usage::scores::TallyMode;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(
                input_paths(args.inputs),
                args.out,
                TallyMode::from_count_flag(args.count),
                args.json,
            );
            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                input_paths(args.inputs),
                PathBuf::from("."),
                TallyMode::Presence,
                false,
            );
            Pipeline::validate().run(&mut ctx)?;
            print_validate_summary(&ctx)?;
        }
    }

    Ok(())
}

fn input_paths(args: InputArgs) -> InputPaths {
    InputPaths {
        compounds: args.compounds,
        annotations: args.annotations,
        metadata: args.metadata,
        reference: args.reference,
    }
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let reference = ctx.reference.as_ref().context("reference maps missing")?;
    let annotations = ctx
        .annotations
        .as_ref()
        .context("annotation matrix missing")?;
    let metadata = ctx.metadata.as_ref().context("metadata missing")?;

    let mapped = ctx
        .compounds
        .iter()
        .filter(|c| reference.reactions_for(c).is_some())
        .count();

    println!("kira-compound-usage validate ok");
    println!("compounds: {} ({} with reactions)", ctx.compounds.len(), mapped);
    println!("genomes: {}", annotations.genomes.len());
    println!("annotations: {}", annotations.enzymes.len());
    println!("groups: {}", metadata.groups.len());
    for (name, members) in &metadata.groups {
        println!("- {}\t{}", name, members.len());
    }
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
