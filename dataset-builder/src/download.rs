use crate::common::*;

/// Manual-download options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// The directory where manually downloaded archives are extracted.
    ///
    /// Defaults to `datasets/downloads/manual` relative to the working
    /// directory.
    #[serde(default = "default_manual_dir")]
    pub manual_dir: PathBuf,
}

impl DownloadConfig {
    pub fn new(manual_dir: impl Into<PathBuf>) -> Self {
        Self {
            manual_dir: manual_dir.into(),
        }
    }

    /// Loads the configuration from a JSON5 file.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Self = json5::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        debug!("loaded download config from '{}'", path.display());
        Ok(config)
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            manual_dir: default_manual_dir(),
        }
    }
}

fn default_manual_dir() -> PathBuf {
    PathBuf::from("datasets/downloads/manual")
}

/// Download and extraction coordination handed to split resolvers.
///
/// Adapters whose data must be fetched by hand only consult
/// [`manual_dir`](Self::manual_dir).
#[derive(Debug, Clone)]
pub struct DownloadManager {
    config: DownloadConfig,
}

impl DownloadManager {
    pub fn new(config: DownloadConfig) -> Self {
        Self { config }
    }

    /// The directory containing manually downloaded, extracted data.
    pub fn manual_dir(&self) -> &Path {
        &self.config.manual_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manual_dir_applies() {
        let config: DownloadConfig = json5::from_str("{}").unwrap();
        assert_eq!(config, DownloadConfig::default());
        assert_eq!(
            config.manual_dir,
            PathBuf::from("datasets/downloads/manual")
        );
    }

    #[test]
    fn manual_dir_is_overridable() {
        let config: DownloadConfig = json5::from_str(r#"{ manual_dir: "/data/manual" }"#).unwrap();
        let manager = DownloadManager::new(config);
        assert_eq!(manager.manual_dir(), Path::new("/data/manual"));
    }
}
