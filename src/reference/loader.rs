use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::io::read_text;
use crate::reference::ReferenceMaps;

pub const REACTION_TO_ENZYME: &str = "reaction_to_enzyme.tsv";
pub const COMPOUND_TO_REACTION: &str = "compound_to_reaction.tsv";
pub const COMPOUND_DESCRIPTIONS: &str = "compound_descriptions.tsv";

/// Loads the three reference tables from `dir`. Returns non-fatal warnings alongside the maps.
pub fn load_reference_dir(dir: &Path) -> Result<(ReferenceMaps, Vec<String>)> {
    if !dir.is_dir() {
        bail!("reference directory {} does not exist", dir.display());
    }

    let mut maps = ReferenceMaps::new();
    let mut warnings = Vec::new();

    let path = resolve_reference_file(dir, REACTION_TO_ENZYME)?;
    let content = read_text(&path)?;
    for (reaction, enzyme) in parse_pair_tsv(&content, &path.display().to_string())? {
        maps.add_reaction_enzyme(&reaction, &enzyme);
    }

    let path = resolve_reference_file(dir, COMPOUND_TO_REACTION)?;
    let content = read_text(&path)?;
    for (compound, reaction) in parse_pair_tsv(&content, &path.display().to_string())? {
        maps.add_compound_reaction(&compound, &reaction);
    }

    let path = resolve_reference_file(dir, COMPOUND_DESCRIPTIONS)?;
    let content = read_text(&path)?;
    for (compound, description) in parse_description_tsv(&content, &path.display().to_string())? {
        if maps.set_description(&compound, &description).is_some() {
            warnings.push(format!(
                "duplicate description for compound '{}' in {} (kept last)",
                compound,
                path.display()
            ));
        }
    }

    info!(
        reactions = maps.n_reactions(),
        compounds = maps.n_compounds(),
        descriptions = maps.n_descriptions(),
        "reference_maps_loaded"
    );

    Ok((maps, warnings))
}

/// Finds `name` or `name.gz` inside `dir`.
pub fn resolve_reference_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let plain = dir.join(name);
    if plain.is_file() {
        return Ok(plain);
    }
    let gz = dir.join(format!("{}.gz", name));
    if gz.is_file() {
        return Ok(gz);
    }
    bail!("missing {} (or {}.gz) in {}", name, name, dir.display())
}

/// Two-column `key<TAB>value` lines; blank lines and `#` comments are skipped.
pub fn parse_pair_tsv(content: &str, source: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let raw = line.trim_end_matches('\r');
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = raw.split('\t').collect();
        if parts.len() != 2 {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        }
        let key = parts[0].trim();
        let value = parts[1].trim();
        if key.is_empty() || value.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        pairs.push((key.to_string(), value.to_string()));
    }
    Ok(pairs)
}

/// Like [`parse_pair_tsv`], but everything after the first tab is the description.
pub fn parse_description_tsv(content: &str, source: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let raw = line.trim_end_matches('\r');
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (compound, description) = raw
            .split_once('\t')
            .with_context(|| format!("{}:{} malformed TSV (expected 2 columns)", source, line_no))?;
        let compound = compound.trim();
        let description = description.trim();
        if compound.is_empty() || description.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        pairs.push((compound.to_string(), description.to_string()));
    }
    Ok(pairs)
}
