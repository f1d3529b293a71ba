use crate::adapters::output::{bundle_zip, render_pairs, render_records, OutputFile};
use crate::adapters::source::load_shipments;
use crate::core::filter::remove_intra;
use crate::core::pairs::{aggregate_pairs, collect_pairs_with};
use crate::core::{ConfigProvider, Pipeline, ShipmentRecord, Storage, TransformResult};
use crate::utils::error::Result;

pub const BUNDLE_FILENAME: &str = "shipments.zip";

pub struct ShipmentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ShipmentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_files(&self, result: &TransformResult) -> Result<Vec<OutputFile>> {
        let mut files = Vec::new();

        for &format in self.config.output_formats() {
            let ext = format.extension();

            files.push(OutputFile {
                name: format!("intra_removed.{}", ext),
                contents: render_records(&result.export_only, format)?.into_bytes(),
            });
            files.push(OutputFile {
                name: format!("shipment_pairs.{}", ext),
                contents: render_pairs(&result.shipment_pairs, format)?.into_bytes(),
            });
            if let Some(aggregated) = &result.aggregated_pairs {
                files.push(OutputFile {
                    name: format!("aggregated_pairs.{}", ext),
                    contents: render_pairs(aggregated, format)?.into_bytes(),
                });
            }
        }

        Ok(files)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ShipmentPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ShipmentRecord>> {
        let source = self.config.source();
        tracing::debug!("Shipment source: {:?}", source);
        load_shipments(&source)
    }

    async fn transform(&self, data: Vec<ShipmentRecord>) -> Result<TransformResult> {
        // 兩個轉換各自作用於原始資料
        let export_only = remove_intra(&data);
        let shipment_pairs = collect_pairs_with(&data, self.config.pairing());
        let aggregated_pairs = self.config.aggregate().then(|| aggregate_pairs(&data));

        Ok(TransformResult {
            source: data,
            export_only,
            shipment_pairs,
            aggregated_pairs,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let files = self.render_files(&result)?;
        let location = self.storage.location();

        if self.config.bundle() {
            tracing::debug!("Creating ZIP bundle with {} files", files.len());
            let zip_data = bundle_zip(&files)?;

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(BUNDLE_FILENAME, &zip_data).await?;
            return Ok(format!("{}/{}", location, BUNDLE_FILENAME));
        }

        for file in &files {
            tracing::debug!("Writing {} ({} bytes)", file.name, file.contents.len());
            self.storage.write_file(&file.name, &file.contents).await?;
        }

        Ok(location)
    }
}
