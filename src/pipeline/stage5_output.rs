use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let usage = ctx.usage.as_ref().context("usage tallies missing")?;
        let enrichment = ctx
            .enrichment
            .as_ref()
            .context("enrichment results missing")?;

        let path = &ctx.output.frequency_path;
        info!(path = %path.display(), "writing frequency matrix");
        tsv_writer::write_frequency_matrix(path, &usage.table)
            .with_context(|| format!("writing: {}", path.display()))?;

        let path = &ctx.output.enrichment_path;
        info!(path = %path.display(), "writing enrichment results");
        tsv_writer::write_enrichment(path, &enrichment.rows)
            .with_context(|| format!("writing: {}", path.display()))?;

        let report = json_writer::build_report(ctx)?;
        if ctx.write_json {
            let path = &ctx.output.json_path;
            json_writer::write_json(path, &report)
                .with_context(|| format!("writing: {}", path.display()))?;
        }
        ctx.report = Some(report);

        info!("stage5_output_ready");
        Ok(())
    }
}
