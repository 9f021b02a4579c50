//! Domain-agnostic multi-objective optimization core.
//!
//! Provides the Pareto machinery shared by multi-objective metaheuristics:
//!
//! - **Dominance**: Constraint-aware Pareto comparison of objective vectors —
//!   the ordering beneath everything else in the crate.
//! - **Ranking**: Fast non-dominated sorting, partitioning a population into
//!   Pareto fronts in O(N²·M).
//! - **Crowding**: NSGA-II crowding distance, a diversity score that rewards
//!   isolated solutions and pins down per-objective extremes.
//! - **Hypervolume**: The WFG algorithm for exact hypervolume and exclusive
//!   per-point contributions, with reusable scratch buffers for hot loops.
//! - **Archives**: Bounded and unbounded non-dominated archives with
//!   pluggable density-based eviction.
//!
//! All objectives are minimized. Solutions are anything implementing
//! [`Solution`](solution::Solution) — plain `Vec<f64>` objective vectors
//! work out of the box.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts and no search loop — scheduling,
//! routing, nesting, and the metaheuristics that explore them are defined
//! by consumers at higher layers, which feed candidate solutions in and
//! read Pareto fronts back out.

pub mod archive;
pub mod crowding;
pub mod dominance;
pub mod hypervolume;
pub mod ranking;
pub mod solution;
