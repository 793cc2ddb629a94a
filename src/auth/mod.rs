//! Authentication types for the eBay API SDK.
//!
//! The SDK does not acquire or refresh tokens. Callers obtain an OAuth
//! access token from eBay's identity service and hand it to the
//! configuration; this module only models the token and how it is presented.
//!
//! - [`AccessToken`]: the token value, masked in `Debug`, with optional expiry
//! - [`TokenScheme`]: `Bearer` for most APIs, `IAF` for the Post-Order API
//!
//! # Example
//!
//! ```rust
//! use ebay_api::auth::{AccessToken, TokenScheme};
//!
//! let token = AccessToken::new("v^1.1#i^1#...").unwrap();
//! let header = token.authorization_value(TokenScheme::Iaf);
//! assert!(header.starts_with("IAF "));
//! ```

mod token;

pub use token::{AccessToken, TokenScheme};
