use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// Each aggregate defines its own `Uuid` newtype id so ids of different
/// aggregates cannot be mixed up at compile time.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the ID as a string
    fn as_string(&self) -> String;

    /// Parse the ID from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::ProjectId;

    #[test]
    fn id_survives_a_string_round_trip() {
        let id = ProjectId::new_v4();
        let back = ProjectId::from_string(&id.as_string()).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ProjectId::from_string("not-a-uuid").is_err());
    }
}
