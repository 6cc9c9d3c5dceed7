//! Helper functions shared by the loader and the CLI

mod date;

pub use date::*;
