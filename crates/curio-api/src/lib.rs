//! Async HTTP client for the Curio marketplace admin API.
//!
//! This crate owns the wire contract and nothing else: the `{"data": ...}`
//! envelope, `{"message": ...}` error bodies, bearer-token auth, and TLS /
//! timeout transport settings. HTTP status codes are interpreted exactly
//! once, in [`client`]; everything above this crate works with the typed
//! [`Error`] taxonomy instead.
//!
//! Session recovery on [`Error::Unauthorized`] (re-login, redirect) is
//! deliberately NOT handled here or anywhere in the sync core -- it belongs
//! to whatever embeds the console.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::AdminClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{Envelope, ListData, PageMeta, ReorderRequest, StatsData};
