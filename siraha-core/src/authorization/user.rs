use super::{has_permission, Permission};
use crate::entities::{Role, User};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("missing permission: {0:?}")]
    MissingPermission(Permission),
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

pub fn authorize_permission(user: &User, permission: Permission) -> Result<()> {
    if !has_permission(user.role, permission) {
        return Err(Error::MissingPermission(permission));
    }
    Ok(())
}
