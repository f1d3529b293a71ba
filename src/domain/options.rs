use serde::{Deserialize, Serialize};

/// Where the shipment table comes from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShipmentSource {
    /// The bundled 25-row table.
    #[default]
    Builtin,
    /// A CSV file with an `origin,destination,quantity` header.
    Csv { path: String },
    /// Rows written directly in the configuration file.
    Inline { records: Vec<Vec<serde_json::Value>> },
}

/// How the first quantity of a merged row is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MergeArithmetic {
    /// `current.quantity + next.quantity`
    #[default]
    Summed,
    /// `current.quantity`
    Raw,
}

/// Which adjacent windows the pair collector visits after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ScanStride {
    /// `(0,1), (1,2), (2,3), ...`
    #[default]
    Overlapping,
    /// `(0,1), (2,3), ...`; an odd trailing record is never visited.
    Chunked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PairingOptions {
    #[serde(default)]
    pub merge: MergeArithmetic,
    #[serde(default)]
    pub stride: ScanStride,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}
