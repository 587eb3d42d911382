use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-precision decimal numbers
    Plain,
    /// The point codec's compact JSON form
    Json,
}

/// Optional file-based defaults for the CLI, overridden by flags.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub precision: Option<usize>,
}

impl FileConfig {
    /// Load the first parseable config file from the search paths.
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("latlon.toml"));
    paths.push(PathBuf::from(".latlon.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("latlon").join("config.toml"));
        paths.push(config_dir.join("latlon.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".latlon.toml"));
        paths.push(home.join(".config").join("latlon").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str("format = \"json\"\nprecision = 3\n").unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.precision, Some(3));
    }

    #[test]
    fn test_empty_config_leaves_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.format, None);
        assert_eq!(config.precision, None);
    }

    #[test]
    fn test_unknown_format_fails() {
        assert!(toml::from_str::<FileConfig>("format = \"xml\"\n").is_err());
    }
}
