//! Wordmine (workspace facade crate).
//!
//! This package keeps the `wordmine::{core,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use wordmine_core as core;
pub use wordmine_types as types;
