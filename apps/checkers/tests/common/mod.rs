#![allow(dead_code)]

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    checkers_test_support::logging::init();
}
