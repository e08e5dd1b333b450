use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use eyre::{Context, Result};
use serde::de::DeserializeOwned;

/// Prefix of every environment variable read as config
pub(crate) const ENV_PREFIX: &str = "DESHARE";

/// Load a settings object from the config locations.
/// Further documentation can be found in the `settings` module.
pub(crate) fn load_settings_object<T>(
    config_dir: &Path,
    extra_files: &[PathBuf],
    env: HashMap<String, String>,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut base_config_sources = vec![];
    let mut builder = Config::builder();

    // Always load the default config files (`./config/*.json`) when present
    if config_dir.is_dir() {
        let mut paths = vec![];
        for entry in config_dir
            .read_dir()
            .with_context(|| format!("Failed to open config directory {config_dir:?}"))?
        {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        // directory order is unspecified
        paths.sort();
        for path in paths {
            base_config_sources.push(format!("{path:?}"));
            builder = builder.add_source(File::from(path));
        }
    }

    // Load a set of additional user specified config files
    let builder = extra_files.iter().fold(builder, |builder, path| {
        builder.add_source(File::from(path.as_path()))
    });

    let config_deserializer = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(Some(env)),
        )
        .build()?;

    match config_deserializer.try_deserialize::<T>() {
        Ok(cfg) => Ok(cfg),
        Err(err) => {
            let mut err = if let Some(source_err) = err.source() {
                let source = format!("Config error source: {source_err}");
                Err(err).context(source)
            } else {
                Err(err.into())
            };

            let extra_sources = extra_files.iter().map(|path| format!("{path:?}"));
            for cfg_path in base_config_sources.into_iter().chain(extra_sources) {
                err = err.with_context(|| format!("Config loaded: {cfg_path}"));
            }

            err.context("Config deserialization error, please check the settings documentation")
        }
    }
}
