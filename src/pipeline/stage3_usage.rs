use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::usage::compute_usage;

pub struct Stage3Usage;

impl Stage3Usage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Usage {
    fn name(&self) -> &'static str {
        "stage3_usage"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let reference = ctx.reference.as_ref().context("reference maps missing")?;
        let annotations = ctx
            .annotations
            .as_ref()
            .context("annotation matrix missing")?;

        let usage = compute_usage(
            reference,
            &ctx.compounds,
            &annotations.by_genome,
            &annotations.genomes,
            ctx.mode,
        );

        info!(
            mode = ctx.mode.as_str(),
            tallied = usage.tallies.len(),
            rows = usage.table.rows.len(),
            skipped = usage.skipped.len(),
            "usage_tallied"
        );
        ctx.usage = Some(usage);
        Ok(())
    }
}
