use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// Identity of the signed-in student.
///
/// This is also the persisted snapshot shape, so field names are part of the
/// stored format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
}

impl User {
    #[must_use]
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            username: username.into(),
        }
    }

    /// Name shown in greetings, falling back to the username when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            self.username.as_str()
        } else {
            name
        }
    }
}
