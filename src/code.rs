//! Deterministic entry codes: category prefixes and collision-free assignment.

pub mod assign;
pub mod category;

pub use assign::{folder_number, CategoryStats, CodeAssigner, CodeAssignmentReport, CodeOutcome};
pub use category::category_prefix;
