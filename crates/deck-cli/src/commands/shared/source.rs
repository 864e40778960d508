use serde::Serialize;

use deck_store::{Loaded, Origin};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{notice, output};

/// A list response tagged with where its collection came from.
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub source: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new<R>(loaded: &Loaded<R>, items: Vec<T>) -> Self {
        Self {
            source: loaded.origin,
            warning: warning(loaded.origin, loaded.error.as_deref()),
            count: items.len(),
            items,
        }
    }
}

/// Explain a non-remote snapshot, or `None` when the fetch succeeded.
#[must_use]
pub fn warning(origin: Origin, error: Option<&str>) -> Option<String> {
    let reason = error.unwrap_or("backend unavailable");
    match origin {
        Origin::Remote => None,
        Origin::Cache => Some(format!("showing cached data: {reason}")),
        Origin::Empty => error.map(|_| format!("no data available: {reason}")),
    }
}

/// Print a listing. Tables get the bare rows and the warning goes to stderr.
pub fn emit<T: Serialize>(listing: &Listing<T>, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            if let Some(warning) = &listing.warning {
                notice(warning, flags.quiet);
            }
            output(&listing.items, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(listing, flags.format),
    }
}
