//! The one and only role and permission model.

use crate::entities::Role;

pub mod user;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    // storefront
    BrowseProducts,
    PlaceOrders,
    // store owner dashboard
    ManageOwnStore,
    ManageOwnProducts,
    ManageOwnOrders,
    // admin console
    ManageUsers,
    ManageStores,
    ManageAllProducts,
    ManageAllOrders,
    ViewAnalytics,
    ManageSettings,
}

use Permission::*;

const GUEST: &[Permission] = &[BrowseProducts];

const CUSTOMER: &[Permission] = &[BrowseProducts, PlaceOrders];

const STORE_OWNER: &[Permission] = &[
    BrowseProducts,
    PlaceOrders,
    ManageOwnStore,
    ManageOwnProducts,
    ManageOwnOrders,
];

const ADMIN: &[Permission] = &[
    BrowseProducts,
    PlaceOrders,
    ManageOwnStore,
    ManageOwnProducts,
    ManageOwnOrders,
    ManageUsers,
    ManageStores,
    ManageAllProducts,
    ManageAllOrders,
    ViewAnalytics,
    ManageSettings,
];

pub const fn permissions_of(role: Role) -> &'static [Permission] {
    match role {
        Role::Guest => GUEST,
        Role::Customer => CUSTOMER,
        Role::StoreOwner => STORE_OWNER,
        Role::Admin => ADMIN,
    }
}

pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_of(role).contains(&permission)
}

/// The least privileged role that is granted the permission.
pub fn min_role_for(permission: Permission) -> Role {
    [Role::Guest, Role::Customer, Role::StoreOwner, Role::Admin]
        .into_iter()
        .find(|role| has_permission(*role, permission))
        .unwrap_or(Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 4] = [Role::Guest, Role::Customer, Role::StoreOwner, Role::Admin];

    #[test]
    fn higher_roles_include_lower_permissions() {
        for (lower, higher) in ALL_ROLES.iter().zip(ALL_ROLES.iter().skip(1)) {
            for p in permissions_of(*lower) {
                assert!(has_permission(*higher, *p), "{higher:?} lacks {p:?}");
            }
        }
    }

    #[test]
    fn role_checks_agree_with_permission_checks() {
        for p in permissions_of(Role::Admin) {
            let min_role = min_role_for(*p);
            for role in ALL_ROLES {
                assert_eq!(role >= min_role, has_permission(role, *p), "{role:?} {p:?}");
            }
        }
    }

    #[test]
    fn admin_only_permissions() {
        for p in [ManageUsers, ManageStores, ViewAnalytics, ManageSettings] {
            assert_eq!(Role::Admin, min_role_for(p));
        }
        assert_eq!(Role::StoreOwner, min_role_for(ManageOwnStore));
        assert_eq!(Role::Customer, min_role_for(PlaceOrders));
        assert_eq!(Role::Guest, min_role_for(BrowseProducts));
    }
}
