use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role{
    Learner,
    Instructor,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser{
    pub name: Option<String>,
    pub role: Option<Role>,
}

/// The caller's identity for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session{
    pub authenticated: bool,
    pub user: Option<CurrentUser>,
    pub token: Option<String>,
    /// Unix timestamp after which the token is no longer accepted.
    pub expires_at: Option<usize>,
}

impl Session {
    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|user| user.role)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.name.as_deref())
    }
}
