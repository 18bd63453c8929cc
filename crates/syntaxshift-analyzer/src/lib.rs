pub mod analyzer;
pub mod complexity;
pub mod heuristics;

pub use analyzer::*;
pub use complexity::*;
pub use heuristics::*;
