//! In-memory user collection and its CRUD rules.

mod error;
mod outcome;
mod policy;

pub use error::UserError;
pub use outcome::*;
pub use policy::{Access, AccessPolicy};

use crate::domain::{seed_users, NewUser, User, UserPatch};

/// Ordered, volatile collection of users.
///
/// Records keep insertion order. Ids are compared by exact string match and
/// are not required to be unique: explicit-id creates and id-changing updates
/// may both introduce duplicates, and lookups always return the first match.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    policy: AccessPolicy,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserStore {
    /// Store holding the three stock users under the default policy.
    pub fn seeded() -> Self {
        Self::with_users(seed_users(), AccessPolicy::default())
    }

    pub fn with_users(users: Vec<User>, policy: AccessPolicy) -> Self {
        Self { users, policy }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Existence is checked before the access policy, so a missing id is
    /// always `NotFound` even when the policy would deny it.
    pub fn get_by_id(&self, id: &str) -> Result<&User, UserError> {
        let user = self
            .users
            .iter()
            .find(|user| user.id == id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        match self.policy.access(&user.id) {
            Access::Allowed => Ok(user),
            Access::Forbidden => Err(UserError::Forbidden),
        }
    }

    /// Appends `user` as given and returns the first record carrying its id,
    /// which is an older record if the id was already taken.
    pub fn create_with_id(&mut self, user: User) -> User {
        let first = self.position(&user.id).unwrap_or(self.users.len());
        self.users.push(user);
        self.users[first].clone()
    }

    /// Assigns `len + 1` as the id. Deletes shrink the count, so the same id
    /// can be handed out again.
    pub fn create_auto_id(&mut self, new_user: NewUser) -> User {
        let user = new_user.with_id((self.users.len() + 1).to_string());
        self.users.push(user.clone());
        user
    }

    /// Removes every record carrying `id`.
    pub fn delete_by_id(&mut self, id: &str) -> Result<DeleteConfirmation, UserError> {
        if self.position(id).is_none() {
            return Err(UserError::NotFound(id.to_string()));
        }
        self.users.retain(|user| user.id != id);
        Ok(DeleteConfirmation::default())
    }

    /// Merges `patch` over the first record carrying `id`, in place.
    pub fn update_by_id(&mut self, id: &str, patch: UserPatch) -> UpdateOutcome {
        let Some(position) = self.position(id) else {
            return UpdateOutcome::missing();
        };
        let updated = self.users[position].merged(patch);
        self.users[position] = updated.clone();
        UpdateOutcome::Updated(updated)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}
