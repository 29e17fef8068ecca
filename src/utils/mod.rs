//! Small shared utilities.

pub mod code_generator;
pub mod password;
