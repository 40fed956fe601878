mod wing;

// Re-export test fixtures
pub use wing::*;
