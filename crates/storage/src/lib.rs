//! Storage layer for well-data services.
//!
//! One SQLite table of well records behind a narrow repository interface.
//! No business rules live here: the store appends, looks up and scans.

pub mod wells;

pub use wells::WellStore;
