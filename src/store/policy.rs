use std::collections::HashMap;

/// Outcome of an access check for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Forbidden,
}

/// Id-keyed access table consulted when reading a single user.
///
/// Ids without an entry are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    rules: HashMap<String, Access>,
}

impl Default for AccessPolicy {
    /// The stock policy: user "1" can never be read by id.
    fn default() -> Self {
        let mut policy = Self::open();
        policy.deny("1");
        policy
    }
}

impl AccessPolicy {
    /// A policy with no entries.
    pub fn open() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn deny(&mut self, id: impl Into<String>) {
        self.rules.insert(id.into(), Access::Forbidden);
    }

    pub fn access(&self, id: &str) -> Access {
        self.rules.get(id).copied().unwrap_or(Access::Allowed)
    }
}
