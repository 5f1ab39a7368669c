mod loader;

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;

pub use loader::{
    COMPOUND_DESCRIPTIONS, COMPOUND_TO_REACTION, REACTION_TO_ENZYME, load_reference_dir,
    parse_description_tsv, parse_pair_tsv, resolve_reference_file,
};

/// Static compound/reaction/enzyme lookups, built once per run and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMaps {
    reaction_to_enzymes: HashMap<String, HashSet<String>>,
    compound_to_reactions: HashMap<String, IndexSet<String>>,
    compound_descriptions: HashMap<String, String>,
}

impl ReferenceMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_reaction_enzyme(&mut self, reaction: &str, enzyme: &str) {
        self.reaction_to_enzymes
            .entry(reaction.to_string())
            .or_default()
            .insert(enzyme.to_string());
    }

    pub fn add_compound_reaction(&mut self, compound: &str, reaction: &str) {
        self.compound_to_reactions
            .entry(compound.to_string())
            .or_default()
            .insert(reaction.to_string());
    }

    /// Returns the previous description when one was replaced.
    pub fn set_description(&mut self, compound: &str, description: &str) -> Option<String> {
        self.compound_descriptions
            .insert(compound.to_string(), description.to_string())
    }

    pub fn reactions_for(&self, compound: &str) -> Option<&IndexSet<String>> {
        self.compound_to_reactions.get(compound)
    }

    pub fn enzymes_for(&self, reaction: &str) -> Option<&HashSet<String>> {
        self.reaction_to_enzymes.get(reaction)
    }

    /// Empty when the compound has no description entry.
    pub fn description(&self, compound: &str) -> &str {
        self.compound_descriptions
            .get(compound)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn n_reactions(&self) -> usize {
        self.reaction_to_enzymes.len()
    }

    pub fn n_compounds(&self) -> usize {
        self.compound_to_reactions.len()
    }

    pub fn n_descriptions(&self) -> usize {
        self.compound_descriptions.len()
    }
}
