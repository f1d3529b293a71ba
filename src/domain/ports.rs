use crate::domain::model::{ShipmentRecord, TransformResult};
use crate::domain::options::{OutputFormat, PairingOptions, ShipmentSource};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human readable location of what was written, e.g. a directory.
    fn location(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> ShipmentSource;
    fn pairing(&self) -> PairingOptions;
    fn output_formats(&self) -> &[OutputFormat];
    fn output_path(&self) -> Option<&str>;
    fn aggregate(&self) -> bool;
    fn bundle(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ShipmentRecord>>;
    async fn transform(&self, data: Vec<ShipmentRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
