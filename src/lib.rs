pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::source::builtin_shipments;
pub use config::cli::{ConsoleStorage, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    etl::EtlEngine,
    filter::remove_intra,
    pairs::{aggregate_pairs, collect_pairs, collect_pairs_with},
    pipeline::ShipmentPipeline,
};
pub use domain::model::{CountryCode, ShipmentPair, ShipmentRecord};
pub use domain::options::{MergeArithmetic, OutputFormat, PairingOptions, ScanStride, ShipmentSource};
pub use utils::error::{EtlError, Result};
