use crate::model::{Message as ModelMessage, User as ModelUser};
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Message {
    pub message: String,
    /// ISO-8601 instant with millisecond precision (UTC)
    pub timestamp: String,
}

impl From<ModelMessage> for Message {
    fn from(m: ModelMessage) -> Self {
        let timestamp = m.timestamp_iso();
        Self {
            message: m.message,
            timestamp,
        }
    }
}
