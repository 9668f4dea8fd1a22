//! Checkers test support utilities
//!
//! Shared by the unit tests and the integration tests of the `checkers`
//! crate. Only logging lives here; game fixtures stay next to the code they
//! exercise.

pub mod logging;
