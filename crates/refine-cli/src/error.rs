use std::path::PathBuf;

use refine_core::CostError;
use refine_data::DataLoadError;

/// Errors that abort a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A table or request file could not be loaded.
    #[error(transparent)]
    Data(#[from] DataLoadError),

    /// The computation or the inventory offset overflowed. Invalid prices
    /// are not an error here; they render the placeholder instead.
    #[error(transparent)]
    Cost(#[from] CostError),

    /// The request file has no parent directory to resolve its table from.
    #[error("cannot resolve table path relative to {0}")]
    RequestPath(PathBuf),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render the report")]
    Render(#[from] std::fmt::Error),
}
