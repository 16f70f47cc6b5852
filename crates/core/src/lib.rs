//! Domain types and pure booking logic shared by the database and API crates.
//!
//! Nothing in this crate performs I/O: every function here takes its inputs
//! (including the current time) explicitly so it can be unit tested.

pub mod error;
pub mod forms;
pub mod listing;
pub mod search;
pub mod shows;
pub mod types;
