// SPDX-License-Identifier: GPL-3.0-only

//! Data layer of GraphDex.
//!
//! Talks to the PokéAPI GraphQL endpoint, flattens its nested payloads into the records the
//! views render and holds the page state that does not depend on the UI toolkit.

pub mod adapter;
pub mod client;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod filter;
pub mod queries;
pub mod query;
pub mod raw;
pub mod route;
pub mod utils;
pub mod view_model;

pub use client::{DexClient, FetchPolicy};
pub use config::ClientConfig;
pub use error::DexError;
