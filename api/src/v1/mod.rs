use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TodoId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of a create request. Older clients send `text` instead of `title`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(alias = "text")]
    pub title: String,
}

/// Body of an update request. Both mutable fields are replaced; a missing
/// `completed` resets the todo to active.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(alias = "text")]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn healthy() -> Self {
        Self {
            status: String::from("healthy"),
        }
    }
}
