//! User Service Wire Models

use serde::{Deserialize, Serialize};

/// One record of the user dataset. Fields are camelCase on the wire,
/// matching the dataset file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    pub email: String,
}

/// Parameters for the GetUser method. The contract wraps the id in a
/// single `value` field.
#[derive(Debug, Deserialize)]
pub struct UserId {
    pub value: String,
}
