use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{EnrichmentSummary, GroupSummary, InputMeta, Outputs, UsesReportV1};

pub fn build_report(ctx: &Ctx) -> Result<UsesReportV1> {
    let usage = ctx.usage.as_ref().context("usage tallies missing")?;
    let enrichment = ctx
        .enrichment
        .as_ref()
        .context("enrichment results missing")?;
    let metadata = ctx.metadata.as_ref().context("metadata missing")?;
    let annotations = ctx
        .annotations
        .as_ref()
        .context("annotation matrix missing")?;

    let groups = metadata
        .groups
        .iter()
        .map(|(name, members)| GroupSummary {
            name: name.clone(),
            members: members.len() as u64,
        })
        .collect();

    let input_meta = InputMeta {
        compounds_requested: ctx.compounds.len() as u64,
        compounds_retained: usage.tallies.len() as u64,
        compounds_skipped: usage.skipped.len() as u64,
        genomes: usage.table.genomes.len() as u64,
        annotations: annotations.enzymes.len() as u64,
        groups,
        mode: ctx.mode.as_str().to_string(),
    };

    let significant_p05 = enrichment
        .rows
        .iter()
        .filter(|row| row.pvalue < 0.05)
        .count() as u64;
    let min_pvalue = enrichment
        .rows
        .iter()
        .map(|row| row.pvalue)
        .min_by(|a, b| a.total_cmp(b));

    Ok(UsesReportV1 {
        tool: "kira-compound-usage".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        skipped_compounds: usage.skipped.clone(),
        enrichment: EnrichmentSummary {
            comparisons: enrichment.rows.len() as u64,
            significant_p05,
            min_pvalue,
        },
        outputs: Outputs {
            frequency_matrix: file_name(&ctx.output.frequency_path),
            enrichment_results: file_name(&ctx.output.enrichment_path),
        },
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, report: &UsesReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
