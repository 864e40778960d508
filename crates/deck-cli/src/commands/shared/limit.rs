/// Effective row limit: global flag, then the configured default.
///
/// A limit of zero means "no limit".
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> Option<usize> {
    let limit = global.unwrap_or(configured);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Keep at most `limit` items.
pub fn truncate<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}
