use crate::error::CleanError;

/// Known AWS regions, one per line.
const REGIONS: &str = include_str!("regions.txt");

/// Check that `input` names a known AWS region, ignoring case.
/// Returns the region in its canonical lower-case form.
pub fn validate_region(input: &str) -> Result<String, CleanError> {
    let wanted = input.trim().to_lowercase();

    REGIONS
        .lines()
        .map(str::trim)
        .find(|region| *region == wanted)
        .map(String::from)
        .ok_or_else(|| CleanError::InvalidRegion(input.into()))
}

/// Resolve the region from the flag (which clap also fills from
/// `AWS_DEFAULT_REGION`) and validate it.
pub fn resolve_region(flag: Option<&str>) -> Result<String, CleanError> {
    match flag.filter(|r| !r.trim().is_empty()) {
        Some(region) => validate_region(region),
        None => Err(CleanError::MissingRegion),
    }
}
