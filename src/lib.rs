//! # daily-client
//!
//! Typed client for the Daily.co video-conferencing REST API: rooms, domain
//! configuration, and meeting tokens.
//!
//! Callers work with camelCase JSON payloads through the typed structs in
//! [`types`]; the wire protocol uses snake_case. The [`case`] module holds
//! the recursive key converter the client applies at the boundary in both
//! directions, so neither side ever sees the other's naming convention.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use daily_client::{Daily, types::{CreateRoomRequest, Privacy}};
//! use secrecy::SecretString;
//!
//! let client = Daily::new(SecretString::from(api_key))?;
//!
//! let room = client
//!     .create_room(&CreateRoomRequest {
//!         name: Some("standup".to_string()),
//!         privacy: Privacy::Private,
//!         config: None,
//!     })
//!     .await?;
//! ```

pub mod case;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

// Re-export commonly used types
pub use case::{to_camel_case, to_snake_case};
pub use client::{Daily, DailyBuilder};
pub use error::{Error, ErrorKind};
