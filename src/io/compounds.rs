use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Result, bail};

use crate::io::open_maybe_gz;

/// One compound identifier per line, order and duplicates preserved. Only the
/// line ends are trimmed, so identifiers with inner spaces pass through intact.
pub fn read_compound_list(path: &Path) -> Result<Vec<String>> {
    let reader = open_maybe_gz(path)?;
    let mut reader = BufReader::new(reader);

    let mut compounds = Vec::new();
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            compounds.push(trimmed.to_string());
        }
        line.clear();
    }

    if compounds.is_empty() {
        bail!("{} contains no compound identifiers", path.display());
    }

    Ok(compounds)
}
