use indexmap::IndexMap;

pub mod enrichment;
pub mod usage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyMode {
    /// One positive per reaction with any present enzyme.
    Presence,
    /// Positive adds the copy numbers of every overlapping enzyme.
    Abundance,
}

impl TallyMode {
    pub fn from_count_flag(count: bool) -> Self {
        if count { Self::Abundance } else { Self::Presence }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Abundance => "abundance",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: u64,
    pub negative: u64,
}

/// Compound to genome to tally, both in first-seen order.
pub type CompoundTallies = IndexMap<String, IndexMap<String, Tally>>;

#[derive(Debug, Clone)]
pub struct AbundanceRow {
    pub compound: String,
    pub description: String,
    /// Positive tallies, aligned with [`UsageTable::genomes`].
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct UsageTable {
    pub genomes: Vec<String>,
    pub rows: Vec<AbundanceRow>,
}

#[derive(Debug, Clone)]
pub struct UsageResult {
    pub table: UsageTable,
    pub tallies: CompoundTallies,
    /// Requested compounds with no reaction mapping, first occurrence only.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EnrichmentRow {
    pub compound: String,
    pub group_1: String,
    pub group_2: String,
    pub group_1_mean: f64,
    pub group_2_mean: f64,
    pub score: f64,
    pub pvalue: f64,
    pub description: String,
}
