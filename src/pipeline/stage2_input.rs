use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::annotations::read_annotation_matrix;
use crate::io::compounds::read_compound_list;
use crate::io::metadata::read_metadata;
use crate::pipeline::Stage;

pub struct Stage2Input;

impl Stage2Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Input {
    fn name(&self) -> &'static str {
        "stage2_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(path = %ctx.inputs.compounds.display(), "parsing compound list");
        let compounds = read_compound_list(&ctx.inputs.compounds).with_context(|| {
            format!(
                "compound list: failed to parse {}",
                ctx.inputs.compounds.display()
            )
        })?;

        info!(path = %ctx.inputs.annotations.display(), "parsing annotation matrix");
        let (annotations, matrix_warnings) = read_annotation_matrix(&ctx.inputs.annotations)
            .with_context(|| {
                format!(
                    "annotation matrix: failed to parse {}",
                    ctx.inputs.annotations.display()
                )
            })?;

        info!(path = %ctx.inputs.metadata.display(), "parsing metadata");
        let metadata = read_metadata(&ctx.inputs.metadata).with_context(|| {
            format!(
                "metadata: failed to parse {}",
                ctx.inputs.metadata.display()
            )
        })?;

        let mut warnings = matrix_warnings;
        for genome in metadata.genome_groups.keys() {
            if !annotations.by_genome.contains_key(genome) {
                warnings.push(format!(
                    "genome '{}' in metadata is not a column of the annotation matrix",
                    genome
                ));
            }
        }
        if metadata.groups.len() < 2 {
            warnings.push(format!(
                "metadata defines {} group(s); no pairwise comparisons will be made",
                metadata.groups.len()
            ));
        }
        for warning in &warnings {
            warn!("{}", warning);
        }

        info!(
            compounds = compounds.len(),
            genomes = annotations.genomes.len(),
            annotations = annotations.enzymes.len(),
            groups = metadata.groups.len(),
            "inputs_parsed"
        );

        ctx.compounds = compounds;
        ctx.annotations = Some(annotations);
        ctx.metadata = Some(metadata);
        ctx.warnings.extend(warnings);
        Ok(())
    }
}
