//! visor - Tabular Dataset Inspector Core
//!
//! The reusable logic behind a dataset-browsing UI: a cell address codec, a
//! sample-based schema inferrer, and the inspector/viewer state a rendering
//! host plugs into. Records are JSON-like; the host owns rendering,
//! routing, and where the data comes from.
//!
//! # Design Principles
//!
//! 1. **Host-agnostic** - column order and count are explicit data, never a
//!    table library's internal model
//! 2. **Pure state** - every transition is a deterministic function of its
//!    inputs; state types are plain and serializable
//! 3. **Snapshot semantics** - a refresh replaces the dataset wholesale;
//!    stale inspector addresses collapse to closed instead of being
//!    reinterpreted
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use visor::{Dataset, DatasetViewer, Record};
//!
//! let dataset = Dataset::new(vec![
//!     Record::from_value(json!({"id": "a", "score": 0.9}))?,
//!     Record::from_value(json!({"id": "b", "score": 0.4}))?,
//! ]);
//!
//! let mut viewer = DatasetViewer::new(dataset);
//! viewer.open_inspector(1, 0)?;
//!
//! let detail = viewer.inspector_detail()?.unwrap();
//! assert!(detail.json().contains("\"id\": \"b\""));
//! # Ok::<(), visor::Error>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::redundant_clone
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]

pub mod adapter;
pub mod address;
pub mod detail;
pub mod error;
pub mod format;
pub mod inspector;
pub mod record;
pub mod schema;
pub mod viewer;
pub mod viewport;

// Re-exports for convenience
pub use adapter::DatasetAdapter;
pub use address::CellAddress;
pub use detail::RecordDetailView;
pub use error::{Error, Result};
pub use format::{display_width, format_value, truncate_string};
pub use inspector::InspectorState;
pub use record::{Dataset, Record};
pub use schema::{Classification, FieldSchema, RenderStrategy, MAX_INFER_DEPTH};
pub use viewer::DatasetViewer;
pub use viewport::Viewport;
