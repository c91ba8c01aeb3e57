//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee identity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    /// Display name
    pub name: String,
}
