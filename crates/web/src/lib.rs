//! Presentation glue shared by every DataHub page: the app header and the
//! logout flow. No contract logic lives here — the access layer is
//! `datahub-client`.

pub mod header;

pub use header::{Page, logout, render_header};
