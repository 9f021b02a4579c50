//! Elitist solution archives.
//!
//! Archives collect the non-dominated solutions discovered by a search and
//! survive them across iterations. [`NonDominatedArchive`] grows without
//! limit; [`BoundedArchive`] enforces a capacity by evicting its least
//! valuable member — judged by crowding distance or exclusive hypervolume —
//! whenever an admission overflows it.
//!
//! # Key Types
//!
//! - [`ArchiveConfig`]: Capacity, objective count, density strategy, parallelism
//! - [`DensityStrategy`]: Which estimator ranks members for eviction
//! - [`BoundedArchive`]: Fixed-capacity archive with density-based truncation
//! - [`NonDominatedArchive`]: Unbounded archive, dominance filtering only
//!
//! # References
//!
//! - Knowles & Corne (2000), *Approximating the Nondominated Front Using the
//!   Pareto Archived Evolution Strategy*
//! - Beume, Naujoks & Emmerich (2007), *SMS-EMOA: Multiobjective selection
//!   based on dominated hypervolume*

mod bounded;
mod config;
mod unbounded;

pub use bounded::BoundedArchive;
pub use config::{ArchiveConfig, DensityStrategy};
pub use unbounded::NonDominatedArchive;
