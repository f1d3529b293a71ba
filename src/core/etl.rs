use crate::core::{Pipeline, TransformResult};
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🚀 Starting shipment ETL process");

        let result = self.extract_and_transform().await?;

        tracing::info!("💾 Loading results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("📁 Output written to: {}", output_path);

        tracing::debug!("ETL process finished in {:?}", started.elapsed());
        Ok(output_path)
    }

    /// Runs extract and transform only; nothing is written.
    pub async fn dry_run(&self) -> Result<TransformResult> {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        self.extract_and_transform().await
    }

    async fn extract_and_transform(&self) -> Result<TransformResult> {
        tracing::info!("📥 Extracting shipments...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        tracing::info!("🔄 Transforming shipments...");
        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Kept {} of {} records for export, collected {} pair rows",
            result.export_only.len(),
            result.source.len(),
            result.shipment_pairs.len()
        );
        if let Some(aggregated) = &result.aggregated_pairs {
            tracing::info!("Aggregated {} country pairs", aggregated.len());
        }

        Ok(result)
    }
}
