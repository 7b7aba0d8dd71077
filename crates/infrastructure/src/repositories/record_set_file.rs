use dns_verify_domain::{DocumentError, RecordSet};
use std::path::Path;
use tracing::debug;

/// Record documents on disk.
pub struct RecordSetFile;

impl RecordSetFile {
    pub fn load(path: impl AsRef<Path>) -> Result<RecordSet, DocumentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DocumentError::FileRead(path.display().to_string(), e.to_string()))?;

        let records = RecordSet::from_document(&contents)?;

        debug!(path = %path.display(), records = records.len(), "Record file loaded");

        Ok(records)
    }

    /// Writes `records` to `path`, truncating an existing file.
    pub fn save(records: &RecordSet, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let document = records.to_document()?;

        std::fs::write(path, document)
            .map_err(|e| DocumentError::FileWrite(path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), records = records.len(), "Record file written");

        Ok(())
    }
}
