//! Word dictionary with prefix completion.
//!
//! Words live in a height-balanced binary search tree ([`domain::AvlTree`]),
//! are persisted to a comma-delimited flat file
//! ([`infrastructure::FileWordStore`]) and are coupled by
//! [`application::services::Dictionary`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
