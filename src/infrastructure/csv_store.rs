// CSV-backed dataset persistence
use crate::application::dataset_store::DatasetStore;
use crate::domain::route::SampleRow;
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvDatasetStore {
    path: PathBuf,
}

impl CsvDatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetStore for CsvDatasetStore {
    async fn save(&self, rows: &[SampleRow]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .from_path(&self.path)
            .with_context(|| format!("failed to open {} for writing", self.path.display()))?;

        for row in rows {
            writer
                .serialize(row)
                .with_context(|| format!("failed to write row to {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<Vec<SampleRow>> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open dataset {}", self.path.display()))?;

        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<SampleRow>().enumerate() {
            let row = record.with_context(|| {
                format!("malformed row {} in {}", index + 1, self.path.display())
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}
