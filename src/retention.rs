use crate::function_version::{DeleteRequest, FunctionVersion};
use std::cmp::Reverse;

/// Sort versions newest first. Labels that are not numbers count as 0,
/// which puts `$LATEST` at the end of the list.
pub fn sort_versions(versions: &mut [FunctionVersion]) {
    versions.sort_by_key(|v| Reverse(v.number()));
}

/// Select the versions to delete from a list sorted with [`sort_versions`],
/// keeping the `retain` most recent ones. `retain` is clamped to at least 1.
pub fn versions_to_delete(sorted: &[FunctionVersion], retain: usize) -> &[FunctionVersion] {
    let retain = retain.max(1);
    if sorted.len() > 1 && retain < sorted.len() {
        &sorted[retain..]
    } else {
        &[]
    }
}

/// Build the delete requests for a set of candidates, never including `$LATEST`.
pub fn delete_requests(candidates: &[FunctionVersion]) -> Vec<DeleteRequest> {
    candidates
        .iter()
        .filter(|v| !v.is_latest())
        .map(DeleteRequest::from)
        .collect()
}

/// Bytes that deleting the candidates would free.
pub fn reclaimable_bytes(candidates: &[FunctionVersion]) -> u64 {
    candidates
        .iter()
        .filter(|v| !v.is_latest())
        .map(|v| v.code_size.max(0) as u64)
        .sum()
}

/// Aggregate code size of all the versions of a function.
pub fn total_storage(versions: &[FunctionVersion]) -> u64 {
    versions.iter().map(|v| v.code_size.max(0) as u64).sum()
}
