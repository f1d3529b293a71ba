use super::DEFAULT_FORMATS;
use crate::core::ConfigProvider;
use crate::domain::options::{
    MergeArithmetic, OutputFormat, PairingOptions, ScanStride, ShipmentSource,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shipment-pairs")]
#[command(about = "Remove intra-country shipments and collect country pairs")]
pub struct CliConfig {
    /// CSV file with an origin,destination,quantity header. Defaults to the built-in table
    #[arg(long)]
    pub input: Option<String>,

    /// TOML configuration file; flags given here override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory to write results to. Results are printed when omitted
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_enum, value_delimiter = ',')]
    pub format: Vec<OutputFormat>,

    #[arg(long, value_enum)]
    pub merge: Option<MergeArithmetic>,

    #[arg(long, value_enum)]
    pub stride: Option<ScanStride>,

    /// Also emit one keyed row per unordered country pair
    #[arg(long)]
    pub aggregate: bool,

    /// Write all outputs into a single zip archive
    #[arg(long)]
    pub bundle: bool,

    /// Load and transform without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn source(&self) -> ShipmentSource {
        match &self.input {
            Some(path) => ShipmentSource::Csv { path: path.clone() },
            None => ShipmentSource::Builtin,
        }
    }

    fn pairing(&self) -> PairingOptions {
        PairingOptions {
            merge: self.merge.unwrap_or_default(),
            stride: self.stride.unwrap_or_default(),
        }
    }

    fn output_formats(&self) -> &[OutputFormat] {
        if self.format.is_empty() {
            DEFAULT_FORMATS
        } else {
            &self.format
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn aggregate(&self) -> bool {
        self.aggregate
    }

    fn bundle(&self) -> bool {
        self.bundle
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
            validation::validate_file_extension("input", input, &["csv"])?;
        }
        if let Some(output_path) = &self.output_path {
            validation::validate_path("output_path", output_path)?;
        }
        if self.bundle {
            validation::validate_required_field("output_path", &self.output_path)?;
        }
        Ok(())
    }
}
