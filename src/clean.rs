use crate::{
    delete::delete_all,
    error::CleanError,
    function_version::FunctionVersion,
    lambda::LambdaClient,
    retention::{delete_requests, reclaimable_bytes, total_storage, versions_to_delete},
    size::SizeUnit,
};
use std::time::Instant;

/// Options of a clean run
#[derive(Clone, Debug)]
pub struct CleanOptions {
    /// Region the run targets
    pub region: String,
    /// Number of versions to keep per function, clamped to at least 1
    pub retain: usize,
    /// Only report what would be deleted
    pub dry_run: bool,
    /// Keep versions that are referenced by an alias
    pub skip_aliases: bool,
    /// Log how many versions of each function will be removed
    pub details: bool,
    /// Unit used to report sizes
    pub size_unit: SizeUnit,
    /// Maximum number of delete calls in flight, unbounded when `None`
    pub max_concurrency: Option<usize>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions {
            region: String::new(),
            retain: 1,
            dry_run: false,
            skip_aliases: false,
            details: false,
            size_unit: SizeUnit::default(),
            max_concurrency: None,
        }
    }
}

/// Summary of a clean run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Functions scanned
    pub functions: usize,
    /// Versions deleted, or that would be deleted in a dry run
    pub versions: usize,
    /// Storage used by the scanned functions before the clean up
    pub storage_before: u64,
    /// Bytes freed, or that would be freed in a dry run
    pub freed: u64,
    /// Storage measured after the clean up, `None` in a dry run
    pub storage_after: Option<u64>,
}

async fn list_targets(
    client: &LambdaClient,
    custom_list: &[String],
) -> Result<Vec<FunctionVersion>, CleanError> {
    if custom_list.is_empty() {
        client.list_functions().await
    } else {
        client.get_functions(custom_list).await
    }
}

async fn measure_storage(
    client: &LambdaClient,
    functions: &[FunctionVersion],
    skip_aliases: bool,
) -> Result<(Vec<Vec<FunctionVersion>>, u64), CleanError> {
    let mut all_versions = Vec::with_capacity(functions.len());
    let mut storage = 0;

    for function in functions {
        let versions = client.list_versions(function, skip_aliases).await?;
        storage += total_storage(&versions);
        all_versions.push(versions);
    }

    Ok((all_versions, storage))
}

/// Remove all but the `retain` most recent versions of every function in
/// the region, or of the functions in `custom_list` when it isn't empty.
#[tracing::instrument(skip(client, custom_list), fields(region = %options.region))]
pub async fn execute_clean(
    client: &LambdaClient,
    options: &CleanOptions,
    custom_list: &[String],
) -> Result<CleanReport, CleanError> {
    let start = Instant::now();
    let unit = options.size_unit;

    tracing::info!("scanning AWS environment in {}", options.region);
    let functions = list_targets(client, custom_list).await?;

    if functions.is_empty() {
        tracing::info!("no functions found in {}", options.region);
        tracing::info!("job duration time: {:.2?}", start.elapsed());
        return Ok(CleanReport::default());
    }

    let (all_versions, storage_before) =
        measure_storage(client, &functions, options.skip_aliases).await?;
    tracing::info!("{} functions identified", functions.len());
    tracing::info!("current storage size: {}", unit.format(storage_before));
    tracing::info!("initiating clean-up process, this may take a few minutes");

    let mut requests = Vec::new();
    let mut reclaimable = 0;
    for (function, versions) in functions.iter().zip(&all_versions) {
        let candidates = versions_to_delete(versions, options.retain);
        let function_requests = delete_requests(candidates);
        if options.details && !function_requests.is_empty() {
            tracing::info!(
                "{:>5} versions of {} to be removed",
                function_requests.len(),
                function.name
            );
        }
        reclaimable += reclaimable_bytes(candidates);
        requests.extend(function_requests);
    }

    let mut report = CleanReport {
        functions: functions.len(),
        versions: requests.len(),
        storage_before,
        freed: reclaimable,
        storage_after: None,
    };

    if options.dry_run {
        tracing::info!(
            "{} unique versions will be removed in an actual execution",
            report.versions
        );
        tracing::info!(
            "{} of storage space will be removed in an actual execution",
            unit.format(reclaimable)
        );
        tracing::info!("job duration time: {:.2?}", start.elapsed());
        return Ok(report);
    }

    delete_all(requests, options.max_concurrency, |request| {
        client.delete_version(request)
    })
    .await?;

    let functions = list_targets(client, custom_list).await?;
    let (_, storage_after) = measure_storage(client, &functions, options.skip_aliases).await?;
    report.freed = storage_before.saturating_sub(storage_after);
    report.storage_after = Some(storage_after);

    tracing::info!("total space freed up: {}", unit.format(report.freed));
    tracing::info!("post clean-up storage size: {}", unit.format(storage_after));
    tracing::info!("job duration time: {:.2?}", start.elapsed());

    Ok(report)
}
