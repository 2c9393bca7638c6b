//! Profile preference configuration.
//!
//! Profiles are static configuration: a named, ordered list of product
//! categories a given kind of user cares about most. They are enumerated at
//! startup and never created, mutated, or persisted at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The set of known profiles, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileBook {
    profiles: BTreeMap<String, Vec<String>>,
}

impl ProfileBook {
    /// Compiled-in defaults, used when no profiles file is configured.
    pub fn builtin() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "tech_enthusiast".to_string(),
            vec![
                "Electronics".to_string(),
                "Gaming".to_string(),
                "Smart Home".to_string(),
            ],
        );
        profiles.insert(
            "casual_user".to_string(),
            vec![
                "Home & Kitchen".to_string(),
                "Books".to_string(),
                "Toys".to_string(),
            ],
        );
        Self { profiles }
    }

    /// Parse a profiles file: a JSON object mapping id -> ordered category list.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Ordered preference list for `id`, if the profile is known.
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.profiles.get(id).map(Vec::as_slice)
    }

    /// Known profile identifiers, in stable (sorted) order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_are_known() {
        let book = ProfileBook::builtin();
        assert_eq!(
            book.get("tech_enthusiast").unwrap(),
            ["Electronics", "Gaming", "Smart Home"]
        );
        assert!(book.get("nobody").is_none());
    }

    #[test]
    fn from_json_parses_id_to_list_map() {
        let book = ProfileBook::from_json(r#"{"minimalist": ["Books"]}"#).unwrap();
        assert_eq!(book.get("minimalist").unwrap(), ["Books"]);
        assert_eq!(book.ids().collect::<Vec<_>>(), ["minimalist"]);
    }

    #[test]
    fn ids_are_sorted() {
        let book = ProfileBook::builtin();
        assert_eq!(
            book.ids().collect::<Vec<_>>(),
            ["casual_user", "tech_enthusiast"]
        );
    }
}
