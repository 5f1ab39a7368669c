use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::scores::{EnrichmentRow, UsageTable};

pub const FREQUENCY_MATRIX: &str = "frequency_matrix.tsv";
pub const ENRICHMENT_RESULTS: &str = "enrichment_results.tsv";

pub const ENRICHMENT_HEADER: [&str; 8] = [
    "Compound",
    "Group_1",
    "Group_2",
    "group_1_mean",
    "group_2_mean",
    "score",
    "pvalue",
    "description",
];

/// Header `Compound` + genomes, then `<compound>~<description>` and one positive tally per genome.
pub fn write_frequency_matrix(path: &Path, table: &UsageTable) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    write!(w, "Compound")?;
    for genome in &table.genomes {
        write!(w, "\t{}", genome)?;
    }
    writeln!(w)?;

    for row in &table.rows {
        if row.counts.len() != table.genomes.len() {
            bail!(
                "abundance row for '{}' has {} values for {} genomes",
                row.compound,
                row.counts.len(),
                table.genomes.len()
            );
        }
        write!(w, "{}~{}", row.compound, row.description)?;
        for count in &row.counts {
            write!(w, "\t{}", count)?;
        }
        writeln!(w)?;
    }

    w.flush()?;
    Ok(())
}

pub fn write_enrichment(path: &Path, rows: &[EnrichmentRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", ENRICHMENT_HEADER.join("\t"))?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{:.6}\t{:.6}\t{:.6}\t{:.6e}\t{}",
            row.compound,
            row.group_1,
            row.group_2,
            row.group_1_mean,
            row.group_2_mean,
            row.score,
            row.pvalue,
            row.description
        )?;
    }

    w.flush()?;
    Ok(())
}
