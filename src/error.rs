use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Different errors that the application can raise
#[derive(Debug, ThisError)]
pub enum CleanError {
    /// Error returned by the Lambda API
    #[error("unexpected lambda error")]
    Lambda(#[from] aws_sdk_lambda::Error),
    /// Error returned if a function configuration is missing an expected field
    #[error("missing function configuration field {0}")]
    MissingField(String),
    /// Error returned when neither the region flag nor AWS_DEFAULT_REGION is set
    #[error("missing region flag and AWS_DEFAULT_REGION env variable, use -r to provide a valid AWS region")]
    MissingRegion,
    /// Error returned when the region is not a known AWS region
    #[error("{0} is an invalid AWS region")]
    InvalidRegion(String),
    /// Error returned if the credentials cannot be resolved
    #[error("unable to retrieve AWS credentials")]
    MissingCredentials,
    /// Error returned if the resolved credentials are already expired
    #[error("AWS credentials expired")]
    ExpiredCredentials,
    /// Error returned when the function list file has an unsupported extension
    #[error("invalid file type provided for {}, must be of type json, yaml or yml", .0.display())]
    InvalidFileType(PathBuf),
    /// Error returned when the function list file cannot be read
    #[error("unable to read the input file {}", path.display())]
    ReadFile {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// Error returned when a JSON function list is malformed
    #[error("unable to decode the json file")]
    Json(#[from] serde_json::Error),
    /// Error returned when a YAML function list is malformed
    #[error("unable to decode the yaml file, ensure the file is in the correct format and that all fields are correct")]
    Yaml(#[from] serde_yaml::Error),
    /// Error returned by the GitHub releases API
    #[error("unable to check for new releases")]
    ReleaseCheck(#[from] octocrab::Error),
    /// Error returned when a release repository is not of the form owner/name
    #[error("invalid release repository {0}, expected owner/name")]
    InvalidRepository(String),
    /// Error returned when a version string cannot be parsed
    #[error("invalid version {0}")]
    InvalidVersion(String),
}
