use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::io::annotations::{CopyNumber, GenomeAnnotations};
use crate::reference::ReferenceMaps;
use crate::scores::{AbundanceRow, CompoundTallies, Tally, TallyMode, UsageResult, UsageTable};

/// Enzymes with a positive copy number in one genome.
#[derive(Debug, Clone, Default)]
pub struct PresentAnnotations<'a> {
    copies: HashMap<&'a str, u64>,
}

impl<'a> PresentAnnotations<'a> {
    pub fn from_column(column: &'a HashMap<String, CopyNumber>) -> Self {
        let copies = column
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(enzyme, count)| (enzyme.as_str(), *count as u64))
            .collect();
        Self { copies }
    }

    pub fn contains(&self, enzyme: &str) -> bool {
        self.copies.contains_key(enzyme)
    }

    pub fn copy_number(&self, enzyme: &str) -> u64 {
        self.copies.get(enzyme).copied().unwrap_or(0)
    }

}

/// Positive/negative reaction support for one compound in one genome.
///
/// Abundance sums saturate at `u64::MAX` instead of overflowing.
pub fn tally_reactions(
    reference: &ReferenceMaps,
    reactions: &IndexSet<String>,
    present: &PresentAnnotations<'_>,
    mode: TallyMode,
) -> Tally {
    let mut tally = Tally::default();
    for reaction in reactions {
        let Some(enzymes) = reference.enzymes_for(reaction) else {
            continue;
        };

        let mut overlap = 0usize;
        let mut copies = 0u64;
        for enzyme in enzymes {
            if present.contains(enzyme) {
                overlap += 1;
                copies = copies.saturating_add(present.copy_number(enzyme));
            }
        }

        if overlap == 0 {
            tally.negative += 1;
            continue;
        }
        let gained = match mode {
            TallyMode::Presence => 1,
            TallyMode::Abundance => copies,
        };
        tally.positive = tally.positive.saturating_add(gained);
    }
    tally
}

/// Tallies every compound with a reaction mapping across `genomes`, in the
/// given order. Compounds without reactions are skipped; genomes absent from
/// `annotations` have nothing present.
pub fn compute_usage(
    reference: &ReferenceMaps,
    compounds: &[String],
    annotations: &GenomeAnnotations,
    genomes: &[String],
    mode: TallyMode,
) -> UsageResult {
    let empty = HashMap::new();
    let present: Vec<PresentAnnotations<'_>> = genomes
        .iter()
        .map(|genome| PresentAnnotations::from_column(annotations.get(genome).unwrap_or(&empty)))
        .collect();

    let mut rows = Vec::with_capacity(compounds.len());
    let mut tallies: CompoundTallies = IndexMap::with_capacity(compounds.len());
    let mut skipped: Vec<String> = Vec::new();

    for compound in compounds {
        let Some(reactions) = reference.reactions_for(compound) else {
            if !skipped.contains(compound) {
                debug!(compound = %compound, "compound has no reaction mapping");
                skipped.push(compound.clone());
            }
            continue;
        };

        let mut counts = Vec::with_capacity(genomes.len());
        let mut per_genome = IndexMap::with_capacity(genomes.len());
        for (genome, present) in genomes.iter().zip(&present) {
            let tally = tally_reactions(reference, reactions, present, mode);
            counts.push(tally.positive);
            per_genome.insert(genome.clone(), tally);
        }

        rows.push(AbundanceRow {
            compound: compound.clone(),
            description: reference.description(compound).to_string(),
            counts,
        });
        tallies.insert(compound.clone(), per_genome);
    }

    UsageResult {
        table: UsageTable {
            genomes: genomes.to_vec(),
            rows,
        },
        tallies,
        skipped,
    }
}
