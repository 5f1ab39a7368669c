use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::enrichment::compute_enrichment;

pub struct Stage4Enrichment;

impl Stage4Enrichment {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Enrichment {
    fn name(&self) -> &'static str {
        "stage4_enrichment"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let reference = ctx.reference.as_ref().context("reference maps missing")?;
        let usage = ctx.usage.as_ref().context("usage tallies missing")?;
        let metadata = ctx.metadata.as_ref().context("metadata missing")?;

        let result = compute_enrichment(&usage.tallies, &metadata.groups, reference);
        // stage2_input already warned once per genome missing from the matrix
        for (group, genome) in &result.missing_members {
            debug!(group = %group, genome = %genome, "group member has no tally");
        }

        info!(
            comparisons = result.rows.len(),
            pairs = metadata.n_pairs(),
            "enrichment_scored"
        );
        ctx.enrichment = Some(result);
        Ok(())
    }
}
