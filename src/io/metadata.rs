use std::path::Path;

use anyhow::{Result, bail};
use indexmap::IndexMap;

use crate::io::read_text;

/// Group name to members, in first-appearance order.
pub type Groups = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default)]
pub struct GroupMetadata {
    pub groups: Groups,
    /// Genome to the groups it was assigned to.
    pub genome_groups: IndexMap<String, Vec<String>>,
}

impl GroupMetadata {
    pub fn n_pairs(&self) -> usize {
        let n = self.groups.len();
        n * n.saturating_sub(1) / 2
    }
}

pub fn read_metadata(path: &Path) -> Result<GroupMetadata> {
    let content = read_text(path)?;
    parse_metadata(&content, &path.display().to_string())
}

/// `genome<TAB>group` lines. Extra columns are ignored; a genome may appear in several groups.
pub fn parse_metadata(content: &str, source: &str) -> Result<GroupMetadata> {
    let mut metadata = GroupMetadata::default();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() < 2 {
            bail!("{}:{} malformed TSV (expected genome and group)", source, line_no);
        }
        let genome = parts[0].trim();
        let group = parts[1].trim();
        if genome.is_empty() || group.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }

        let members = metadata.groups.entry(group.to_string()).or_default();
        if members.iter().any(|m| m == genome) {
            continue;
        }
        members.push(genome.to_string());
        metadata
            .genome_groups
            .entry(genome.to_string())
            .or_default()
            .push(group.to_string());
    }

    if metadata.groups.is_empty() {
        bail!("{} contains no group assignments", source);
    }

    Ok(metadata)
}
