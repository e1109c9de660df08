use super::prelude::*;

/// Hides the contact details of the owner from everyone
/// except administrators.
pub fn export_store(store: Store, role: Role) -> Store {
    if role < Role::Admin {
        Store {
            owner_email: None,
            ..store
        }
    } else {
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siraha_entities::builders::*;

    #[test]
    fn strip_owner_email_for_non_admins() {
        let store = Store::build().owner_email("owner@example.com").finish();
        for role in [Role::Guest, Role::Customer, Role::StoreOwner] {
            assert_eq!(None, export_store(store.clone(), role).owner_email);
        }
        assert_eq!(
            Some("owner@example.com"),
            export_store(store, Role::Admin).owner_email.as_deref()
        );
    }
}
