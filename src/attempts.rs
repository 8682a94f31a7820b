use crate::error::MgResult;
use crate::session::AttemptRecord;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Append-only CSV log of attempt records, kept locally in place of the
/// remote attempt service.
pub struct AttemptLog {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl AttemptLog {
    pub fn open<P: AsRef<Path>>(path: P) -> MgResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let is_new = file.metadata()?.len() == 0;
        let writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        info!("📝 Attempt log: {}", path.display());
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, record: &AttemptRecord) -> MgResult<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        debug!(
            "attempt logged: correct={} time={}s",
            record.is_correct, record.time_spent_seconds
        );
        Ok(())
    }

    pub fn read_all<P: AsRef<Path>>(path: P) -> MgResult<Vec<AttemptRecord>> {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for result in rdr.deserialize::<AttemptRecord>() {
            records.push(result?);
        }
        Ok(records)
    }
}
