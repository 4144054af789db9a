//! Utility modules: log setup, on-disk paths and terminal mode.

pub mod logging;
pub mod persistence;
pub mod terminal;
