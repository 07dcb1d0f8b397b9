//! Configuration loading.
//!
//! Sources are layered, later ones winning:
//! 1. Built-in defaults
//! 2. `betterdetex.yaml` in the working directory, or an explicit `--config` file
//! 3. `BETTERDETEX_*` environment variables
//! 4. The `--threshold` command-line override

use std::path::Path;

use super::{CONFIG_FILE, ConfigError, DEFAULT_THRESHOLD, DetexConfig, ENV_PREFIX};

impl DetexConfig {
    /// Load the config from the command line arguments.
    ///
    /// An explicit config file must exist; the default `betterdetex.yaml` is
    /// optional.
    pub fn load_from_args(
        config_file: Option<&Path>,
        threshold: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Path::new(CONFIG_FILE).to_path_buf(), false),
        };
        let path = if path.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(path)
        } else {
            path
        };

        Self::load(&path, required, threshold)
    }

    /// Load the config from a file path plus environment and override.
    pub(crate) fn load(
        path: &Path,
        required: bool,
        threshold: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let mut builder = config::Config::builder()
            .set_default("threshold", DEFAULT_THRESHOLD)?
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(required))
            .add_source(config::Environment::with_prefix(ENV_PREFIX));
        if let Some(threshold) = threshold {
            builder = builder.set_override("threshold", threshold)?;
        }

        let config = builder.build()?.try_deserialize::<DetexConfig>()?;
        config.validate()?;
        tracing::debug!(path = %path.display(), threshold = config.threshold, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("betterdetex.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "threshold: 0.25\n");
        let config = DetexConfig::load(&path, true, None).unwrap();
        assert_eq!(config.threshold, 0.25);
    }

    #[test]
    fn test_missing_optional_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("betterdetex.yaml");
        let config = DetexConfig::load(&path, false, None).unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(DetexConfig::load(&path, true, None).is_err());
    }

    #[test]
    fn test_override_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "threshold: 0.25\n");
        let config = DetexConfig::load(&path, true, Some(0.75)).unwrap();
        assert_eq!(config.threshold, 0.75);
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "threshold: 2.0\n");
        let err = DetexConfig::load(&path, true, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_explicit_relative_path_resolves_against_cwd() {
        let err = DetexConfig::load_from_args(Some(Path::new("no-such-dir/x.yaml")), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }
}
