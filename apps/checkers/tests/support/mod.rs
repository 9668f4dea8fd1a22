#![allow(dead_code)]

pub mod boards;
pub mod recording_rules;

pub use recording_rules::{RecordingRules, RulesCall};
