use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let usage = ctx.usage.as_ref().context("usage tallies missing")?;
    let enrichment = ctx
        .enrichment
        .as_ref()
        .context("enrichment results missing")?;
    let n_groups = ctx.metadata.as_ref().map(|m| m.groups.len()).unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("kira-compound-usage v{}\n", version));
    out.push_str(&format!(
        "Input: {} compounds, {} genomes, {} groups, mode={}\n",
        ctx.compounds.len(),
        usage.table.genomes.len(),
        n_groups,
        ctx.mode.as_str()
    ));
    out.push_str(&format!(
        "Compounds: {} tallied, {} without reactions\n",
        usage.tallies.len(),
        usage.skipped.len()
    ));

    let significant = enrichment
        .rows
        .iter()
        .filter(|row| row.pvalue < 0.05)
        .count();
    out.push_str(&format!(
        "Comparisons: {} ({} with p < 0.05)\n",
        enrichment.rows.len(),
        significant
    ));
    out.push_str(&format!(
        "Output: {}\n",
        ctx.output.out_dir.display()
    ));

    Ok(out)
}
