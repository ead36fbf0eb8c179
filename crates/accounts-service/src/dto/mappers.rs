//! Entity -> response mappers

use accounts_core::UserAccount;

use super::responses::UserResponse;

impl From<&UserAccount> for UserResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
            name: account.name.clone(),
            age: account.age,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
