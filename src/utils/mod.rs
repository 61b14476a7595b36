// file: src/utils/mod.rs
// description: shared utilities
// reference: internal helpers

pub mod logging;
