use crate::function_version::FunctionVersion;

/// Drop the versions that an alias currently points to.
pub fn exclude_aliased(
    versions: Vec<FunctionVersion>,
    aliased_versions: &[String],
) -> Vec<FunctionVersion> {
    versions
        .into_iter()
        .filter(|v| !aliased_versions.iter().any(|a| *a == v.version))
        .collect()
}
