use std::path::PathBuf;

use crate::io::annotations::AnnotationMatrix;
use crate::io::metadata::GroupMetadata;
use crate::io::tsv_writer::{ENRICHMENT_RESULTS, FREQUENCY_MATRIX};
use crate::reference::ReferenceMaps;
use crate::schema::v1::UsesReportV1;
use crate::scores::enrichment::EnrichmentResult;
use crate::scores::{TallyMode, UsageResult};

#[derive(Debug, Clone)]
pub struct InputPaths {
    pub compounds: PathBuf,
    pub annotations: PathBuf,
    pub metadata: PathBuf,
    pub reference: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub frequency_path: PathBuf,
    pub enrichment_path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub inputs: InputPaths,
    pub mode: TallyMode,
    pub write_json: bool,
    pub reference: Option<ReferenceMaps>,
    pub compounds: Vec<String>,
    pub annotations: Option<AnnotationMatrix>,
    pub metadata: Option<GroupMetadata>,
    pub usage: Option<UsageResult>,
    pub enrichment: Option<EnrichmentResult>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: Option<UsesReportV1>,
}

impl Ctx {
    pub fn new(inputs: InputPaths, out_dir: PathBuf, mode: TallyMode, write_json: bool) -> Self {
        let frequency_path = out_dir.join(FREQUENCY_MATRIX);
        let enrichment_path = out_dir.join(ENRICHMENT_RESULTS);
        let json_path = out_dir.join("uses_report.json");
        Self {
            inputs,
            mode,
            write_json,
            reference: None,
            compounds: Vec::new(),
            annotations: None,
            metadata: None,
            usage: None,
            enrichment: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                frequency_path,
                enrichment_path,
                json_path,
            },
            report: None,
        }
    }
}
