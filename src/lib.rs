//! `nodeconf` - Configuration loader and validator for blockchain node test
//! networks
//!
//! This library parses the plain-text `key = value` configuration format of
//! a blockchain node process, validates plugin lists against the node's
//! plugin registry, and exposes parsed values to test and orchestration code.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
