use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Numeric user identifier assigned by the backend
pub type UserId = u64;

/// Registry account as listed by the admin endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Deleted accounts are disabled, not removed
    #[serde(default)]
    pub disabled: bool,
}

impl User {
    /// Apply a modification the backend accepted
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(login) = &patch.login {
            self.login = login.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }
    }
}

/// Single user with the names of the packages it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub packages: Vec<String>,
}

/// Body of the create-user request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewUser {
    pub login: String,
    pub password: String,
    pub email: String,
    pub is_admin: bool,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("login", &self.login)
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}

/// Partial user sent by the modify request; absent fields are left untouched
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.login.is_none()
            && self.email.is_none()
            && self.is_admin.is_none()
            && self.password.is_none()
    }
}

impl std::fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPatch")
            .field("login", &self.login)
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// A single failing field of the create-user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Login cannot be empty")]
    MissingLogin,

    #[error("Email cannot be empty")]
    MissingEmail,

    #[error("Both password fields are required")]
    MissingPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Every failing field of a rejected form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid user form: {}", join_fields(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn contains(&self, field: FieldError) -> bool {
        self.0.contains(&field)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Create-user form as filled in by the operator
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub login: String,
    pub email: String,
    pub password_first: String,
    pub password_second: String,
    pub is_admin: bool,
}

impl UserForm {
    /// Check the form before anything is sent
    pub fn validate(&self) -> Result<NewUser, ValidationErrors> {
        let mut errors = Vec::new();

        if self.login.trim().is_empty() {
            errors.push(FieldError::MissingLogin);
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::MissingEmail);
        }
        if self.password_first.is_empty() || self.password_second.is_empty() {
            errors.push(FieldError::MissingPassword);
        } else if self.password_first != self.password_second {
            errors.push(FieldError::PasswordMismatch);
        }

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(NewUser {
            login: self.login.trim().to_string(),
            password: self.password_first.clone(),
            email: self.email.trim().to_string(),
            is_admin: self.is_admin,
        })
    }
}

impl std::fmt::Debug for UserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserForm")
            .field("login", &self.login)
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}
