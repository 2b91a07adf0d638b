//! Browser storage
//!
//! localStorage implementation of the core crate's storage seam.

pub mod local;

pub use local::LocalStorage;
