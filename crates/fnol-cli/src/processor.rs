//! Claims processing pipeline.
//!
//! Wires the three stages together: text is extracted into a field tree,
//! checked for missing mandatory fields, then routed.

use crate::config::Config;
use crate::error::{CliError, Result};
use fnol_domain::{ClaimRecord, ExtractedFieldTree, Route};
use fnol_extractor::{is_supported_document, FieldPatternExtractor};
use fnol_gatekeeper::Gatekeeper;
use fnol_router::RoutingEngine;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runs documents through extraction, validation and routing.
#[derive(Debug)]
pub struct ClaimsProcessor {
    extractor: FieldPatternExtractor,
    gatekeeper: Gatekeeper,
    engine: RoutingEngine,
}

/// One successfully processed document in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// Source document
    pub source: PathBuf,
    /// Where the result JSON was written
    pub output: PathBuf,
    /// Assigned route
    pub route: Route,
}

/// One document that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    /// Source document
    pub source: PathBuf,
    /// Error message
    pub error: String,
}

/// Outcome of processing a directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Documents processed, in file name order
    pub processed: Vec<BatchEntry>,
    /// Documents skipped because of an error
    pub failed: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Total number of documents attempted.
    pub fn total(&self) -> usize {
        self.processed.len() + self.failed.len()
    }
}

impl ClaimsProcessor {
    /// Create a processor from explicit stages.
    pub fn new(extractor: FieldPatternExtractor, gatekeeper: Gatekeeper, engine: RoutingEngine) -> Self {
        Self {
            extractor,
            gatekeeper,
            engine,
        }
    }

    /// Create a processor from configuration, validating every section.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            FieldPatternExtractor::try_new(config.extractor.clone())?,
            Gatekeeper::try_new(config.validation.clone())?,
            RoutingEngine::try_new(config.routing.clone())?,
        ))
    }

    /// Process already-decoded document text.
    pub fn process_text(&self, text: &str) -> ClaimRecord {
        self.assess(self.extractor.extract_fields(text))
    }

    /// Load a document from disk and process it.
    pub fn process_document(&self, path: &Path) -> Result<ClaimRecord> {
        info!("Processing {}", path.display());
        let tree = self.extractor.extract_document(path)?;
        Ok(self.assess(tree))
    }

    fn assess(&self, tree: ExtractedFieldTree) -> ClaimRecord {
        let missing = self.gatekeeper.identify_missing_fields(&tree);
        let routing = self.engine.route(&tree, &missing);
        ClaimRecord::new(tree, missing, routing)
    }

    /// Write a record as pretty-printed JSON, creating parent directories.
    pub fn save_record(&self, record: &ClaimRecord, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(path, json)?;
        info!("Saved result to {}", path.display());
        Ok(())
    }

    /// Process every supported document in a directory.
    ///
    /// Documents are handled in file name order and each result is written
    /// to `<output_dir>/<stem>_result.json`. A document that fails is
    /// recorded in the summary and the batch moves on.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
        let documents = list_documents(input_dir)?;
        info!("Found {} documents in {}", documents.len(), input_dir.display());

        let mut summary = BatchSummary::default();
        for source in documents {
            let output = output_dir.join(result_file_name(&source));

            let outcome = self
                .process_document(&source)
                .and_then(|record| self.save_record(&record, &output).map(|_| record.recommended_route));

            match outcome {
                Ok(route) => summary.processed.push(BatchEntry {
                    source,
                    output,
                    route,
                }),
                Err(e) => {
                    warn!("Skipping {}: {}", source.display(), e);
                    summary.failed.push(BatchFailure {
                        source,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }
}

/// Supported documents directly inside `dir`, sorted by file name.
fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_document(&path) {
            documents.push(path);
        }
    }

    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(documents)
}

/// `claim_01.txt` becomes `claim_01_result.json`.
pub fn result_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    format!("{}_result.json", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::MandatoryField;

    #[test]
    fn test_result_file_name() {
        assert_eq!(result_file_name(Path::new("docs/claim_01.txt")), "claim_01_result.json");
        assert_eq!(result_file_name(Path::new("report.PDF")), "report_result.json");
    }

    #[test]
    fn test_process_unlabeled_text() {
        let processor = ClaimsProcessor::from_config(&Config::default()).unwrap();
        let record = processor.process_text("nothing to see here");

        assert_eq!(record.recommended_route, Route::ManualReview);
        assert_eq!(record.missing_fields, MandatoryField::CANONICAL.to_vec());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.validation.mandatory_fields.clear();
        assert!(matches!(
            ClaimsProcessor::from_config(&config),
            Err(CliError::Gatekeeper(_))
        ));
    }

    #[test]
    fn test_missing_directory() {
        let processor = ClaimsProcessor::from_config(&Config::default()).unwrap();
        let result = processor.process_directory(Path::new("/nonexistent/docs"), Path::new("out"));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
