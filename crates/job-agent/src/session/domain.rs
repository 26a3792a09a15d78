use serde::{Deserialize, Serialize};

use super::provider::SessionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    /// Trims both fields and rejects blank names or addresses without `@`.
    pub fn validated(self) -> Result<Self, SessionError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        if name.is_empty() {
            return Err(SessionError::InvalidUser("name is required".to_string()));
        }
        if !email.contains('@') {
            return Err(SessionError::InvalidUser(format!(
                "'{email}' is not an email address"
            )));
        }
        Ok(Self { name, email })
    }
}

/// Opaque bearer token issued by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Who is looking at a view. Handed to every view explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: User) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Signed-in landing content; anonymous visitors get nothing.
    pub fn welcome(&self) -> Option<WelcomeView> {
        self.current_user.as_ref().map(WelcomeView::for_user)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeView {
    pub greeting: String,
    pub prompt: &'static str,
    pub actions: Vec<QuickAction>,
}

impl WelcomeView {
    fn for_user(user: &User) -> Self {
        Self {
            greeting: format!("Welcome back, {}!", user.name),
            prompt: "Ready to find your next opportunity? Here's what you can do:",
            actions: vec![
                QuickAction {
                    title: "Upload New CV",
                    description: "Update your CV for better job matches",
                    href: Some("/upload-cv"),
                },
                QuickAction {
                    title: "Browse Jobs",
                    description: "View personalized job recommendations",
                    href: Some("/jobs"),
                },
                QuickAction {
                    title: "Your Profile",
                    description: "Manage your preferences and settings",
                    href: None,
                },
            ],
        }
    }
}
