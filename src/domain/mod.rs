//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, view-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned view-models with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod quote;
pub mod transaction;
pub mod wallet;
