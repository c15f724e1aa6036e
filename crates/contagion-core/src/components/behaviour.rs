//! Behaviour Component

use uuid::Uuid;

/// An observable behaviour. Immutable once linked.
#[derive(Debug, Clone)]
pub struct Behaviour {
    pub uuid: Uuid,
    pub name: String,
}

impl Behaviour {
    pub fn new(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
        }
    }
}

impl PartialEq for Behaviour {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Behaviour {}

impl std::hash::Hash for Behaviour {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}
