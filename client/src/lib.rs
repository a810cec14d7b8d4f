//! Client-side utilities for the Christmas wish list program.
//!
//! Includes the wallet bridge, the remote account client, terminal views and the orchestrator that
//! ties them together.

pub mod app;
pub mod cluster;
pub mod keypairs;
pub mod logs;
pub mod mock_helpers;
pub mod pretty;
pub mod remote;
pub mod transactions;
pub mod views;
pub mod wallet;

pub use logs::LogColor;
