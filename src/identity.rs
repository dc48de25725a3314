use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, BuilderResult};

/// Roles an account can hold, least to most privileged: authors edit
/// pages, editors additionally manage custom components, administrators
/// additionally manage users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Editor,
    Administrator,
}

impl Role {
    pub fn can_edit_pages(&self) -> bool {
        true
    }

    pub fn can_manage_components(&self) -> bool {
        matches!(self, Role::Editor | Role::Administrator)
    }

    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Administrator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Pending,
}

/// Profile record for a signed-in account, keyed by user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// The identity/profile collaborator, interface only. The hosted backend
/// behind it is out of scope.
pub trait IdentityProvider {
    fn current_user(&self) -> Option<&UserProfile>;
    fn sign_out(&mut self);
}

/// Gate for page-editing operations: requires a signed-in, active
/// profile.
pub fn ensure_can_edit(user: Option<&UserProfile>) -> BuilderResult<()> {
    let user = user.ok_or(BuilderError::NotAuthenticated)?;
    if user.status != AccountStatus::Active {
        return Err(BuilderError::AccountInactive);
    }
    if !user.role.can_edit_pages() {
        return Err(BuilderError::PermissionDenied {
            action: "edit pages".to_string(),
        });
    }
    Ok(())
}

/// Gate for custom component management.
pub fn ensure_can_manage_components(user: Option<&UserProfile>) -> BuilderResult<()> {
    ensure_can_edit(user)?;
    let user = user.ok_or(BuilderError::NotAuthenticated)?;
    if !user.role.can_manage_components() {
        return Err(BuilderError::PermissionDenied {
            action: "manage custom components".to_string(),
        });
    }
    Ok(())
}

/// Fixed-profile provider for tests and single-user tooling.
#[derive(Debug, Default)]
pub struct StaticIdentity {
    user: Option<UserProfile>,
}

impl StaticIdentity {
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn sign_out(&mut self) {
        self.user = None;
    }
}
