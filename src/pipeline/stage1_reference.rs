use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::reference::load_reference_dir;

pub struct Stage1Reference;

impl Stage1Reference {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Reference {
    fn name(&self) -> &'static str {
        "stage1_reference"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dir = &ctx.inputs.reference;
        let (reference, warnings) = load_reference_dir(dir)
            .with_context(|| format!("reference: failed to load {}", dir.display()))?;

        ctx.warnings.extend(warnings);
        ctx.reference = Some(reference);
        Ok(())
    }
}
