//! arkiv-core - Core library for Arkiv
//!
//! This crate contains the shared models, backend API client, session state
//! machine, and client-side list filtering used by the Arkiv mobile shell.
//! All persistence and business rules live in the backend service; this
//! library is the typed seam between the screens and that service.

pub mod api;
pub mod error;
pub mod models;
pub mod search;
pub mod session;
pub mod util;
pub mod validate;

pub use api::ArchiveClient;
pub use error::{Error, Result};
pub use models::{Article, Category, Role, User};
pub use session::{Session, SessionState};
