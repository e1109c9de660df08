//! Identity of the current user.
//!
//! A [`SessionContext`] is created once when the process
//! starts and passed explicitly to everything that needs
//! to know who is acting. Logging out ends the session
//! and falls back to the guest role.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::{
    authorization::{has_permission, Permission},
    entities::*,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("This is not allowed")]
    Forbidden,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Opaque token that identifies a session on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.0.as_simple())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: User,
    pub token: SessionToken,
    pub started_at: Timestamp,
}

#[derive(Debug, Default)]
pub struct SessionContext {
    identity: Option<Identity>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session and replaces a previous one.
    pub fn login(&mut self, user: User) -> &Identity {
        if let Some(previous) = self.identity.take() {
            log::debug!("Replacing session of {}", previous.user.email);
        }
        log::info!("{} logged in as {}", user.email, user.role);
        self.identity.insert(Identity {
            user,
            token: SessionToken::new(),
            started_at: Timestamp::now(),
        })
    }

    pub fn logout(&mut self) -> Option<Identity> {
        let identity = self.identity.take();
        if let Some(identity) = &identity {
            log::info!("{} logged out", identity.user.email);
        }
        identity
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Guests have the lowest role.
    pub fn role(&self) -> Role {
        self.identity
            .as_ref()
            .map(|id| id.user.role)
            .unwrap_or_default()
    }

    pub fn can(&self, permission: Permission) -> bool {
        has_permission(self.role(), permission)
    }

    pub fn require_role(&self, min_required_role: Role) -> Result<&Identity> {
        let identity = self.identity.as_ref().ok_or(Error::NotLoggedIn)?;
        if identity.user.role < min_required_role {
            return Err(Error::Forbidden);
        }
        Ok(identity)
    }

    pub fn require_permission(&self, permission: Permission) -> Result<&Identity> {
        let identity = self.identity.as_ref().ok_or(Error::NotLoggedIn)?;
        if !has_permission(identity.user.role, permission) {
            return Err(Error::Forbidden);
        }
        Ok(identity)
    }
}
