//! paodrill-core — engine for the PAO number-mnemonic trainer.
//!
//! This crate holds everything with state or policy: the immutable
//! association table, the durable stats store, the weak-entry-biased
//! selector, and the session loop that ties them together. Terminal I/O
//! lives behind the [`traits::TrainerIo`] seam so the engine can be driven
//! by the CLI or by scripted tests.

pub mod config;
pub mod error;
pub mod model;
pub mod selector;
pub mod session;
pub mod stats;
pub mod table;
pub mod traits;
