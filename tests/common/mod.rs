#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_all_finite, assert_transform_eq, assert_vector_eq};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
