//! Article categories.

use serde::{Deserialize, Serialize};

/// A category row; articles reference it by name string, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
