use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, bail};

use crate::io::read_text;

pub type CopyNumber = i64;

/// Per-genome enzyme copy numbers, keyed by genome then enzyme.
pub type GenomeAnnotations = HashMap<String, HashMap<String, CopyNumber>>;

#[derive(Debug, Clone, Default)]
pub struct AnnotationMatrix {
    /// Column order of the input matrix.
    pub genomes: Vec<String>,
    /// Row order of the input matrix (first occurrence).
    pub enzymes: Vec<String>,
    pub by_genome: GenomeAnnotations,
}

impl AnnotationMatrix {
    pub fn copy_number(&self, genome: &str, enzyme: &str) -> CopyNumber {
        self.by_genome
            .get(genome)
            .and_then(|column| column.get(enzyme))
            .copied()
            .unwrap_or(0)
    }
}

pub fn read_annotation_matrix(path: &Path) -> Result<(AnnotationMatrix, Vec<String>)> {
    let content = read_text(path)?;
    parse_annotation_matrix(&content, &path.display().to_string())
}

/// Parses a matrix whose header is `<label>\t<genome>...` and whose rows are
/// `<enzyme>\t<count>...`. Returns the matrix and non-fatal warnings.
pub fn parse_annotation_matrix(
    content: &str,
    source: &str,
) -> Result<(AnnotationMatrix, Vec<String>)> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        bail!("{} is empty", source);
    };

    let genomes: Vec<String> = header
        .split('\t')
        .skip(1)
        .map(|g| g.trim().to_string())
        .collect();
    if genomes.is_empty() {
        bail!("{}: header has no genome columns", source);
    }

    let mut by_genome: GenomeAnnotations = HashMap::with_capacity(genomes.len());
    for (col, genome) in genomes.iter().enumerate() {
        if genome.is_empty() {
            bail!("{}: empty genome name in header column {}", source, col + 2);
        }
        if by_genome.insert(genome.clone(), HashMap::new()).is_some() {
            bail!("{}: duplicate genome '{}' in header", source, genome);
        }
    }

    let mut enzymes = Vec::new();
    let mut warnings = Vec::new();
    let expected = genomes.len() + 1;

    for (line_no, line) in lines {
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != expected {
            bail!(
                "{}:{} expected {} columns, found {}",
                source,
                line_no,
                expected,
                parts.len()
            );
        }
        let enzyme = parts[0].trim();
        if enzyme.is_empty() {
            bail!("{}:{} empty annotation identifier", source, line_no);
        }

        let mut duplicate = false;
        for (genome, raw) in genomes.iter().zip(&parts[1..]) {
            let count = parse_copy_number(raw.trim()).ok_or_else(|| {
                anyhow::anyhow!(
                    "{}:{} invalid copy number '{}' for genome '{}'",
                    source,
                    line_no,
                    raw.trim(),
                    genome
                )
            })?;
            if let Some(column) = by_genome.get_mut(genome) {
                duplicate |= column.insert(enzyme.to_string(), count).is_some();
            }
        }

        if duplicate {
            warnings.push(format!(
                "duplicate annotation '{}' at {}:{} (kept last)",
                enzyme, source, line_no
            ));
        } else {
            enzymes.push(enzyme.to_string());
        }
    }

    Ok((
        AnnotationMatrix {
            genomes,
            enzymes,
            by_genome,
        },
        warnings,
    ))
}

/// Accepts integers and integral floats (`3`, `3.0`).
pub fn parse_copy_number(raw: &str) -> Option<CopyNumber> {
    if let Ok(v) = raw.parse::<CopyNumber>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < CopyNumber::MAX as f64 {
        Some(v as CopyNumber)
    } else {
        None
    }
}
