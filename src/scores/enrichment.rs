use indexmap::{IndexMap, IndexSet};

use crate::io::metadata::Groups;
use crate::math::stats::{mann_whitney_u, mean};
use crate::reference::ReferenceMaps;
use crate::scores::{CompoundTallies, EnrichmentRow, Tally};

#[derive(Debug, Clone, Default)]
pub struct EnrichmentResult {
    pub rows: Vec<EnrichmentRow>,
    /// `(group, genome)` members that have no tally and were left out.
    pub missing_members: Vec<(String, String)>,
}

/// Every unordered pair of distinct groups, in declared order.
pub fn group_pairs(groups: &Groups) -> Vec<(&str, &str)> {
    let names: Vec<&str> = groups.keys().map(String::as_str).collect();
    let mut pairs = Vec::with_capacity(names.len() * names.len().saturating_sub(1) / 2);
    for (i, first) in names.iter().enumerate() {
        for second in &names[i + 1..] {
            pairs.push((*first, *second));
        }
    }
    pairs
}

fn positive_values(
    members: &[String],
    tallies: &IndexMap<String, Tally>,
    group: &str,
    missing: &mut IndexSet<(String, String)>,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(members.len());
    for genome in members {
        match tallies.get(genome) {
            Some(tally) => values.push(tally.positive as f64),
            None => {
                missing.insert((group.to_string(), genome.clone()));
            }
        }
    }
    values
}

/// Compares positive tallies between each pair of groups for every tallied compound.
pub fn compute_enrichment(
    tallies: &CompoundTallies,
    groups: &Groups,
    reference: &ReferenceMaps,
) -> EnrichmentResult {
    let pairs = group_pairs(groups);
    let mut rows = Vec::with_capacity(tallies.len() * pairs.len());
    let mut missing = IndexSet::new();

    for (compound, per_genome) in tallies {
        for &(group_1, group_2) in &pairs {
            let x = positive_values(&groups[group_1], per_genome, group_1, &mut missing);
            let y = positive_values(&groups[group_2], per_genome, group_2, &mut missing);
            let test = mann_whitney_u(&x, &y);
            rows.push(EnrichmentRow {
                compound: compound.clone(),
                group_1: group_1.to_string(),
                group_2: group_2.to_string(),
                group_1_mean: mean(&x),
                group_2_mean: mean(&y),
                score: test.statistic,
                pvalue: test.pvalue,
                description: reference.description(compound).to_string(),
            });
        }
    }

    EnrichmentResult {
        rows,
        missing_members: missing.into_iter().collect(),
    }
}
