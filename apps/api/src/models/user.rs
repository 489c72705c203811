use serde::{Deserialize, Serialize};

/// The signed-in account as reported by the identity provider.
///
/// `id` is opaque to this service; it is only used as the ownership key of stored
/// resumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>) -> Self {
        CurrentUser {
            id: id.into(),
            display_name: None,
            email: None,
        }
    }

    /// Name shown in the dashboard greeting.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("User")
    }
}
