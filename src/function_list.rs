use crate::error::CleanError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// JSON function list, extra keys are ignored
#[derive(Debug, Deserialize)]
struct JsonFunctionList {
    lambdas: Vec<String>,
}

/// YAML function list, only the known keys are accepted
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct YamlFunctionList {
    lambdas: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum FileType {
    Json,
    Yaml,
}

fn file_type(path: &Path) -> Result<FileType, CleanError> {
    let name = path.to_string_lossy();
    if name.ends_with("json") {
        Ok(FileType::Json)
    } else if name.ends_with("yaml") || name.ends_with("yml") {
        Ok(FileType::Yaml)
    } else {
        Err(CleanError::InvalidFileType(path.into()))
    }
}

/// Load the names of the functions to clean up from a JSON or YAML file.
#[tracing::instrument]
pub fn load_function_list(path: &Path) -> Result<Vec<String>, CleanError> {
    let file_type = file_type(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| CleanError::ReadFile {
        path: PathBuf::from(path),
        source,
    })?;

    let lambdas = match file_type {
        FileType::Json => serde_json::from_str::<JsonFunctionList>(&content)?.lambdas,
        FileType::Yaml => serde_yaml::from_str::<YamlFunctionList>(&content)?.lambdas,
    };

    Ok(lambdas)
}
