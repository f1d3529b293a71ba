pub mod etl;
pub mod filter;
pub mod pairs;
pub mod pipeline;

pub use crate::domain::model::{ShipmentPair, ShipmentRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
