//! Data files for the refine calculator.
//!
//! Tier tables (for example a promotional refine-event table) and
//! calculation requests can be supplied as RON, TOML, or JSON files. The
//! format is picked from the file extension.

pub mod loader;
pub mod schema;

pub use loader::{
    DataLoadError, Format, detect_format, find_data_file, load_named_table, load_request,
    load_tier_table, require_data_file,
};
pub use schema::{PriceValue, RefineRequest, TierStepData};
