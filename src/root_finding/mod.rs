//! Root scan: adaptive clustering, bracket refinement and result assembly.

// common helpers
pub mod config;
pub mod errors;
pub mod interval;
pub mod report;
pub(crate) mod eval;
pub(crate) mod signs;

// phases
pub mod admission;
pub mod cluster;
pub mod refine;
pub mod assembly;

// entry points
pub mod find_roots;
