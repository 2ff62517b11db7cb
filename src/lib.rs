#![deny(missing_docs)]
//! <fullname>Lambda cleanup</fullname>
//!
//! Removes former versions of AWS Lambda functions, keeping `$LATEST`
//! and the most recent versions of each function.
mod aliases;

/// Command line arguments
pub mod cli;

mod clean;
pub use clean::{execute_clean, CleanOptions, CleanReport};

mod delete;

mod error;
pub use error::CleanError;

mod function_list;
pub use function_list::load_function_list;

mod function_version;
pub use function_version::{DeleteRequest, FunctionVersion, LATEST};

mod lambda;
pub use lambda::LambdaClient;

mod region;
pub use region::resolve_region;

/// `release` checks GitHub for newer releases of the tool
pub mod release;

mod retention;

/// `session` includes helpers to configure AWS credentials
pub mod session;

mod size;
pub use size::SizeUnit;

#[cfg(test)]
mod test_util;

/// `run_clean` is the entry point of the clean command: it validates the
/// configuration, resolves credentials and runs the clean up.
#[tracing::instrument(skip(global))]
pub async fn run_clean(global: &cli::GlobalArgs, count: i64) -> Result<CleanReport, CleanError> {
    let region = resolve_region(global.region.as_deref())?;

    let custom_list = match &global.list_file {
        Some(path) => {
            tracing::info!("custom function list provided");
            load_function_list(path)?
        }
        None => Vec::new(),
    };

    if global.dry_run {
        tracing::info!("******** DRY RUN MODE ENABLED ********");
    }
    if global.skip_aliases {
        tracing::info!("skip aliases enabled");
    }

    let config = session::load_config(&region, global.profile.as_deref()).await;
    session::verify_credentials(&config).await?;

    let client = LambdaClient::new(&config);
    let options = global.clean_options(region, count);
    execute_clean(&client, &options, &custom_list).await
}
