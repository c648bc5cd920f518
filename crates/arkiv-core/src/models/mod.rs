//! Data models for Arkiv
//!
//! Entities are transmitted by the backend and consumed verbatim; the client
//! never derives state from them beyond transient UI toggles.

mod article;
mod category;
mod role;
mod user;

pub use article::{Article, ArticleDraft, FileUpload, LikeState};
pub use category::Category;
pub use role::{Role, UnknownRole};
pub use user::{NewUser, User, UserUpdate};
