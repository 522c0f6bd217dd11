// Dataset persistence seam
use crate::domain::route::SampleRow;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Persist the full dataset, replacing any previous contents.
    async fn save(&self, rows: &[SampleRow]) -> anyhow::Result<()>;

    /// Load every row. Fails when the file is absent or the schema does not
    /// match the expected columns.
    async fn load(&self) -> anyhow::Result<Vec<SampleRow>>;
}
