use crate::prelude::*;

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

pub const AUDIT_LOG_HEADER: [&str; 3] = ["Recipient", "Status", "TxHash/Error"];

/// One row of the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct AuditRecord {
    #[serde(rename = "Recipient")]
    #[getset(get = "pub")]
    recipient: Address,

    #[serde(rename = "Status")]
    #[getset(get_copy = "pub")]
    status: TransferStatus,

    #[serde(rename = "TxHash/Error")]
    #[getset(get = "pub")]
    detail: String,
}

impl From<&TransferResult> for AuditRecord {
    fn from(result: &TransferResult) -> Self {
        Self {
            recipient: *result.recipient(),
            status: result.status(),
            detail: result.detail().clone(),
        }
    }
}

/// Append-only CSV record of every attempted transfer. Each row is synced
/// to disk before [`AuditLog::append`] returns.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl AuditLog {
    /// Creates (or truncates) the file at `path` and writes the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, AuditLogError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|underlying| AuditLogError::Create {
            path: path.clone(),
            underlying,
        })?;
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let mut log = Self { path, writer };
        log.writer.write_record(AUDIT_LOG_HEADER)?;
        log.persist()?;
        debug!("Audit log created at {}", log.path.display());
        Ok(log)
    }

    pub fn append(&mut self, result: &TransferResult) -> Result<(), AuditLogError> {
        self.writer.serialize(AuditRecord::from(result))?;
        self.persist()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&mut self) -> Result<(), AuditLogError> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        Ok(())
    }
}

/// Reads back an audit log written by [`AuditLog`].
pub fn read_audit_log(path: impl AsRef<Path>) -> Result<Vec<AuditRecord>, AuditLogError> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize()
        .collect::<Result<Vec<AuditRecord>, csv::Error>>()
        .map_err(AuditLogError::from)
}
