//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (WordStore, FileSystem)
//! but are themselves concrete structs, not traits.

mod dictionary;

pub use dictionary::{DeleteOutcome, Dictionary, InsertOutcome};
