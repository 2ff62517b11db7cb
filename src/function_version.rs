use crate::error::CleanError;
use aws_sdk_lambda::model::FunctionConfiguration;

/// Version label AWS uses for the unpublished, always-retained version.
pub const LATEST: &str = "$LATEST";

/// `FunctionVersion` stores information about a single published version of a function
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionVersion {
    /// Function name
    pub name: String,
    /// Version label, a number or `$LATEST`
    pub version: String,
    /// Size of the deployment package in bytes
    pub code_size: i64,
    /// Function ARN, qualified with the version for published versions
    pub arn: Option<String>,
}

impl FunctionVersion {
    /// Whether this is the `$LATEST` pseudo-version.
    pub fn is_latest(&self) -> bool {
        self.version == LATEST
    }

    /// Numeric value of the version label, 0 when the label is not a number.
    pub fn number(&self) -> i64 {
        self.version.parse().unwrap_or(0)
    }
}

impl TryFrom<FunctionConfiguration> for FunctionVersion {
    type Error = CleanError;

    /// Try to convert a Lambda function configuration into a FunctionVersion.
    /// This could fail as the configuration might be missing some fields.
    fn try_from(value: FunctionConfiguration) -> Result<Self, Self::Error> {
        Ok(FunctionVersion {
            name: value
                .function_name
                .ok_or_else(|| CleanError::MissingField("FunctionName".into()))?,
            version: value
                .version
                .ok_or_else(|| CleanError::MissingField("Version".into()))?,
            code_size: value.code_size,
            arn: value.function_arn,
        })
    }
}

/// `DeleteRequest` identifies one function version to delete
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Function name
    pub function_name: String,
    /// Version to delete
    pub qualifier: String,
}

impl From<&FunctionVersion> for DeleteRequest {
    fn from(value: &FunctionVersion) -> Self {
        DeleteRequest {
            function_name: value.name.clone(),
            qualifier: value.version.clone(),
        }
    }
}
