use crate::error::CleanError;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_types::{credentials::ProvideCredentials, region::Region, SdkConfig};
use std::time::SystemTime;

/// Build the AWS configuration for a region.
///
/// When a profile is given, credentials come from that profile of the
/// shared credentials files instead of the default provider chain.
#[tracing::instrument]
pub async fn load_config(region: &str, profile: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::from_env().region(Region::new(region.to_owned()));

    if let Some(profile) = profile {
        tracing::info!("using the AWS profile {}", profile);
        let provider = ProfileFileCredentialsProvider::builder()
            .profile_name(profile)
            .build();
        loader = loader.credentials_provider(provider);
    }

    loader.load().await
}

/// Make sure credentials can be resolved and are still valid before
/// any Lambda call is made.
#[tracing::instrument(skip(config))]
pub async fn verify_credentials(config: &SdkConfig) -> Result<(), CleanError> {
    let provider = config
        .credentials_provider()
        .ok_or(CleanError::MissingCredentials)?;

    let credentials = provider.provide_credentials().await.map_err(|err| {
        tracing::debug!("credentials error: {}", err);
        CleanError::MissingCredentials
    })?;

    match credentials.expiry() {
        Some(expiry) if expiry <= SystemTime::now() => Err(CleanError::ExpiredCredentials),
        _ => Ok(()),
    }
}
