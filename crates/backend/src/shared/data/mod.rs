pub mod generator;
pub mod handle;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use handle::SnapshotHandle;
pub use store::{KpiSeries, PerspectiveData, ScorecardSnapshot, SnapshotBuilder};
