use super::DEFAULT_FORMATS;
use crate::core::ConfigProvider;
use crate::domain::options::{MergeArithmetic, OutputFormat, PairingOptions, ScanStride, ShipmentSource};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub source: ShipmentSource,
    #[serde(default)]
    pub pairing: PairingConfig,
    #[serde(default)]
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairingConfig {
    #[serde(default)]
    pub merge: MergeArithmetic,
    #[serde(default)]
    pub stride: ScanStride,
    #[serde(default)]
    pub aggregate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    #[serde(default = "default_formats")]
    pub output_formats: Vec<OutputFormat>,
    #[serde(default)]
    pub bundle: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            output_formats: default_formats(),
            bundle: false,
        }
    }
}

fn default_formats() -> Vec<OutputFormat> {
    DEFAULT_FORMATS.to_vec()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub verbose: Option<bool>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHIPMENTS_CSV})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以命令列參數覆蓋設定檔的值
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            self.source = ShipmentSource::Csv { path: input.clone() };
            tracing::info!("🔧 Source overridden to CSV file: {}", input);
        }
        if let Some(output_path) = &cli.output_path {
            self.load.output_path = Some(output_path.clone());
        }
        if !cli.format.is_empty() {
            self.load.output_formats = cli.format.clone();
        }
        if let Some(merge) = cli.merge {
            self.pairing.merge = merge;
        }
        if let Some(stride) = cli.stride {
            self.pairing.stride = stride;
        }
        self.pairing.aggregate |= cli.aggregate;
        self.load.bundle |= cli.bundle;
    }

    pub fn verbose(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.verbose)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> ShipmentSource {
        self.source.clone()
    }

    fn pairing(&self) -> PairingOptions {
        PairingOptions {
            merge: self.pairing.merge,
            stride: self.pairing.stride,
        }
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.load.output_formats
    }

    fn output_path(&self) -> Option<&str> {
        self.load.output_path.as_deref()
    }

    fn aggregate(&self) -> bool {
        self.pairing.aggregate
    }

    fn bundle(&self) -> bool {
        self.load.bundle
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.pipeline.name.trim().is_empty() {
            return Err(EtlError::InvalidConfigValueError {
                field: "pipeline.name".to_string(),
                value: self.pipeline.name.clone(),
                reason: "Value cannot be empty or whitespace-only".to_string(),
            });
        }

        if let ShipmentSource::Csv { path } = &self.source {
            validation::validate_path("source.path", path)?;
            validation::validate_file_extension("source.path", path, &["csv"])?;
        }

        if let Some(output_path) = &self.load.output_path {
            validation::validate_path("load.output_path", output_path)?;
        }
        validation::validate_non_empty("load.output_formats", &self.load.output_formats)?;

        if self.load.bundle {
            validation::validate_required_field("load.output_path", &self.load.output_path)?;
        }

        Ok(())
    }
}
