use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::AppError;

pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const GETADDRESS_API_KEY: &str = "GETADDRESS_API_KEY";
pub const GOOGLE_SHEET_ID: &str = "GOOGLE_SHEET_ID";
pub const GOOGLE_SHEETS_CREDENTIALS_FILE: &str = "GOOGLE_SHEETS_CREDENTIALS_FILE";

const ENV_FILE_NAME: &str = ".env";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Where the environment-definition file comes from.
#[derive(Debug, Clone)]
pub enum EnvFileSource {
    /// `.env` in the working directory or one of its ancestors.
    Discover,
    /// Exactly this file, with no fallback.
    Path(PathBuf),
}

/// Key-value view of the environment, passed explicitly to the reporter.
///
/// Loading never writes to the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Definition file first, then the process environment on top of it.
    /// Variables already set in the process win, as with `dotenvy::dotenv`.
    pub fn load(source: &EnvFileSource) -> Result<Self, AppError> {
        let mut snapshot = Self::from_file(source)?;
        for (key, value) in env::vars_os() {
            if let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) {
                snapshot.vars.insert(key, value);
            }
        }
        Ok(snapshot)
    }

    /// Reads only the definition file. A missing file yields an empty snapshot.
    pub fn from_file(source: &EnvFileSource) -> Result<Self, AppError> {
        let path = match source {
            EnvFileSource::Discover => {
                let cwd = env::current_dir()
                    .map_err(|e| AppError::EnvFile(format!("current directory: {}", e)))?;
                match find_env_file(&cwd) {
                    Some(path) => path,
                    None => {
                        debug!(cwd = %cwd.display(), "no env file found, skipping");
                        return Ok(Self::default());
                    }
                }
            }
            EnvFileSource::Path(path) => path.clone(),
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no env file found, skipping");
                return Ok(Self::default());
            }
            Err(e) => return Err(AppError::EnvFile(format!("{}: {}", path.display(), e))),
        };
        debug!(path = %path.display(), "reading env file");

        let contents = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
        Self::collect(dotenvy::from_read_iter(contents))
    }

    #[cfg(test)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvSnapshot {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), but an empty value counts as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    fn collect<R: Read>(iter: dotenvy::Iter<R>) -> Result<Self, AppError> {
        let mut vars = BTreeMap::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    debug!(%key, "loaded from env file");
                    vars.insert(key, value);
                }
                // A failing reader keeps failing; bail out instead of spinning.
                Err(dotenvy::Error::Io(e)) => return Err(AppError::EnvFile(e.to_string())),
                Err(e) => warn!("Skipping malformed env file line: {}", e),
            }
        }
        Ok(EnvSnapshot { vars })
    }
}

/// `.env` in `start` or the nearest ancestor that has one.
fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
