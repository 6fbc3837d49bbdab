use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin profile. Having one is what lets a logged-in user into `/admin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
}
