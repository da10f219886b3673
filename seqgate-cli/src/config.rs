use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seqgate_digest::DigestKind;
use seqgate_io::{Capabilities, CodecKind};

/// Settings read from a `--config` TOML file. Command line flags win over every key here.
#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SeqgateConfig {
    /// Seed for `sample`; `0` means OS entropy, same as on the command line.
    pub seed: Option<u32>,
    pub digest: Option<DigestKind>,
    /// File that fatal errors are mirrored to.
    pub log: Option<PathBuf>,
    /// Codecs inputs may use. Plain input is always allowed.
    pub codecs: Option<Vec<CodecKind>>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl SeqgateConfig {
    /// The codecs this build can decode, narrowed to the configured list.
    pub fn capabilities(&self) -> Capabilities {
        match &self.codecs {
            Some(allowed) => Capabilities::compiled().restrict_to(allowed),
            None => Capabilities::compiled(),
        }
    }
}

impl TryFrom<&Path> for SeqgateConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> ConfigResult<Self> {
        let toml_str = read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
