//! Request file loading.

use std::fs::File;
use std::io::BufReader;

use camino::Utf8Path;
use serde::Deserialize;

use crate::director::DirectorRequest;
use crate::error::DirectorError;

/// Top-level shape of a request file.
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    /// Launcher executable used to reach the director application.
    /// Defaults to `eclipse` on PATH when omitted.
    #[serde(default)]
    pub launcher: Option<String>,
    /// The director invocation itself.
    pub director: DirectorRequest,
}

/// Loads and parses a YAML request file.
pub fn load_request(path: &Utf8Path) -> Result<RequestFile, DirectorError> {
    let file = File::open(path).map_err(|e| DirectorError::io(path.to_string(), e))?;
    let reader = BufReader::new(file);
    let request: RequestFile = serde_yaml::from_reader(reader)
        .map_err(|e| DirectorError::Config(format!("failed to parse yaml: {}: {}", path, e)))?;
    Ok(request)
}
