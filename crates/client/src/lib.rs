//! Typed access layer for the DataHub tabular-data service.
//!
//! All traffic funnels through [`gateway::ApiClient`], which owns the
//! session cookie store and normalizes every response into a three-outcome
//! contract:
//!
//! - `Ok(Some(value))` — decoded JSON success body;
//! - `Ok(None)` — the session expired (HTTP 401); the injected
//!   [`navigator::Navigator`] has been pointed at the login page and the
//!   caller gets no value back;
//! - `Err(error)` — a normalized server error or a transport fault.
//!
//! The domain modules (`auth`, `connections`, `metadata`, `records`,
//! `query`, `logs`) expose one typed wrapper per endpoint. They shape
//! parameters and delegate to the gateway; none of them adds control flow.

pub mod auth;
pub mod connections;
pub mod error;
pub mod gateway;
pub mod logs;
pub mod metadata;
pub mod navigator;
pub mod query;
pub mod records;

pub use {
    error::{Error, Result},
    gateway::{ApiClient, DEFAULT_BASE_PATH, Message},
    navigator::Navigator,
};
