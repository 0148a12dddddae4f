use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CorpusConfig {
    /// Corpus root override. When absent, the shared memory directory under
    /// the home directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl CorpusConfig {
    /// Resolve the corpus root, defaulting to `~/.local/share/memory`.
    pub fn resolve_root(&self) -> anyhow::Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".local").join("share").join("memory"))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Directory the dataset files are written to.
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("training_data")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    /// Rows shown in the domain distribution table.
    #[serde(default = "ReportConfig::default_domain_top")]
    pub domain_top: usize,
    /// Context-type examples echoed after extraction.
    #[serde(default = "ReportConfig::default_sample_size")]
    pub sample_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            domain_top: Self::default_domain_top(),
            sample_size: Self::default_sample_size(),
        }
    }
}

impl ReportConfig {
    const fn default_domain_top() -> usize {
        15
    }

    const fn default_sample_size() -> usize {
        10
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'memtrain init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Load the config file if present, otherwise fall back to defaults so
    /// the tool works without any setup.
    pub fn load_or_default() -> anyhow::Result<Self> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    fn config_path() -> anyhow::Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join("memtrain").join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("memtrain");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "corpus": {
    "root": "/home/you/.local/share/memory"
  },
  "output": {
    "dir": "training_data"
  },
  "report": {
    "domain_top": 15,
    "sample_size": 10
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point corpus.root at your memory directory (or delete the key");
        println!("      to use ~/.local/share/memory)");
        println!("   2. Run 'memtrain extract' to build the training datasets");
        println!();
        Ok(())
    }
}
