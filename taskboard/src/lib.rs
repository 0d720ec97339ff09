//! Task board client library.
//!
//! Layers: [`config`] resolves the API endpoint and timeouts, [`gateway`]
//! maps domain operations onto HTTP requests, and [`store`] holds the
//! in-memory board state with its filtered view and task draft.

pub mod config;
pub mod gateway;
pub mod store;
