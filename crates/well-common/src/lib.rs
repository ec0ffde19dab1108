//! Common types shared across all well-data services.

pub mod error;
pub mod record;
pub mod spatial;

pub use error::{WellError, WellResult};
pub use record::{CoordinateRow, WellRecord};
pub use spatial::{validate_polygon, wells_within};
