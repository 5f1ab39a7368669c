use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_reference;
pub mod stage2_input;
pub mod stage3_usage;
pub mod stage4_enrichment;
pub mod stage5_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Full run: inputs, tallies, enrichment and output files.
    pub fn full() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_reference::Stage1Reference::new()),
            Box::new(stage2_input::Stage2Input::new()),
            Box::new(stage3_usage::Stage3Usage::new()),
            Box::new(stage4_enrichment::Stage4Enrichment::new()),
            Box::new(stage5_output::Stage5Output::new()),
        ])
    }

    /// Parses reference data and inputs without computing or writing anything.
    pub fn validate() -> Self {
        Self::new(vec![
            Box::new(stage1_reference::Stage1Reference::new()),
            Box::new(stage2_input::Stage2Input::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
