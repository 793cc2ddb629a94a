//! REST clients scoped to an eBay API family.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `put()`, `delete()` relative to a base path
//! - [`RequestOptions`]: per-call params, headers, body and required headers
//!
//! # Path Normalization
//!
//! Paths are relative to the client's base path:
//!
//! - A missing leading slash is added: `item` -> `/item`
//! - Empty paths are rejected
//! - Paths that repeat the base path are rejected, so
//!   `/buy/feed/v1_beta/item` on a client for `/buy/feed/v1_beta` fails
//!   instead of requesting `/buy/feed/v1_beta/buy/feed/v1_beta/item`
//!
//! # Headers
//!
//! Per-call headers win over scoped headers ([`RestClient::with_header`]),
//! which win over the root client's defaults. Names are compared
//! case-insensitively; the case supplied last is what gets sent.

mod client;
mod options;

pub use client::RestClient;
pub use options::RequestOptions;
