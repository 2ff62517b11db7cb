use crate::error::CleanError;
use octocrab::models::repos::Release;
use semver_rs::Version;
use std::cmp::Ordering;

/// Default GitHub repository publishing the releases of this tool.
pub const DEFAULT_RELEASE_REPOSITORY: &str = "karl-cardenas-coding/go-lambda-cleanup";

/// Outcome of comparing the running version with the latest release
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// A newer release is available
    NewRelease {
        /// Tag of the latest release
        tag: String,
        /// Page of the latest release
        url: String,
    },
    /// The running version is the latest release
    UpToDate,
    /// The running version is newer than the latest release
    PreRelease,
}

impl ReleaseStatus {
    /// Message shown to the user.
    pub fn message(&self) -> String {
        match self {
            ReleaseStatus::NewRelease { tag, url } => {
                format!("There is a new release available: {tag}, download it here - {url}")
            }
            ReleaseStatus::UpToDate => "No new version available".into(),
            ReleaseStatus::PreRelease => "You are running a pre-release version".into(),
        }
    }
}

/// semver_rs yields an empty version instead of an error for input it
/// cannot match, so the `major.minor.patch` core is checked first.
fn has_version_core(version: &str) -> bool {
    let core = version
        .split(|c| c == '-' || c == '+')
        .next()
        .unwrap_or_default();
    let parts: Vec<_> = core.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_version(version: &str) -> Result<Version, CleanError> {
    let trimmed = version.strip_prefix('v').unwrap_or(version);
    if !has_version_core(trimmed) {
        return Err(CleanError::InvalidVersion(version.into()));
    }
    Version::new(trimmed)
        .parse()
        .map_err(|_| CleanError::InvalidVersion(version.into()))
}

/// Compare the running version with a release tag such as `v1.2.0`.
pub fn compare_release(current: &str, tag: &str, url: &str) -> Result<ReleaseStatus, CleanError> {
    let current_version = parse_version(current)?;
    let release_version = parse_version(tag)?;

    match current_version.partial_cmp(&release_version) {
        Some(Ordering::Less) => Ok(ReleaseStatus::NewRelease {
            tag: tag.into(),
            url: url.into(),
        }),
        Some(Ordering::Equal) => Ok(ReleaseStatus::UpToDate),
        Some(Ordering::Greater) => Ok(ReleaseStatus::PreRelease),
        None => Err(CleanError::InvalidVersion(tag.into())),
    }
}

/// Fetch the latest release of `repository` (`owner/name`) from GitHub.
#[tracing::instrument]
pub async fn latest_release(repository: &str) -> Result<Release, CleanError> {
    let (owner, repo) = repository
        .split_once('/')
        .ok_or_else(|| CleanError::InvalidRepository(repository.into()))?;

    tracing::info!("checking for new releases");
    let release = octocrab::instance()
        .repos(owner, repo)
        .releases()
        .get_latest()
        .await?;

    Ok(release)
}

/// Check whether a newer release than `current` is published.
pub async fn check_for_new_release(
    repository: &str,
    current: &str,
) -> Result<ReleaseStatus, CleanError> {
    let release = latest_release(repository).await?;
    compare_release(current, &release.tag_name, release.html_url.as_str())
}
