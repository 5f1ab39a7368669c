use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub compounds_requested: u64,
    pub compounds_retained: u64,
    pub compounds_skipped: u64,
    pub genomes: u64,
    pub annotations: u64,
    pub groups: Vec<GroupSummary>,
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub members: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outputs {
    pub frequency_matrix: String,
    pub enrichment_results: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentSummary {
    pub comparisons: u64,
    pub significant_p05: u64,
    pub min_pvalue: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsesReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub skipped_compounds: Vec<String>,
    pub enrichment: EnrichmentSummary,
    pub outputs: Outputs,
    pub warnings: Vec<String>,
}
