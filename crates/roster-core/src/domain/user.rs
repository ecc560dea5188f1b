//! User domain types.
//!
//! A `UserRecord` is a plain snapshot of one person returned by a user
//! source. Records carry no identity: two fetches produce unrelated sets,
//! and equality is purely structural.

use serde::{Deserialize, Serialize};

/// One fetched person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The person's name.
    pub name: Name,
    /// Email address, passed through unvalidated.
    pub email: String,
    /// Portrait URLs in three sizes.
    pub picture: Picture,
}

/// The name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Honorific (e.g., "Mr", "Ms", "Dr").
    pub title: String,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

impl Name {
    /// Join title, first and last name with single spaces, skipping empty parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [&self.title, &self.first, &self.last]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A user's picture in different sizes.
///
/// The URLs are opaque text; nothing here fetches or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// URL of the large portrait.
    pub large: String,
    /// URL of the medium portrait.
    pub medium: String,
    /// URL of the thumbnail portrait.
    pub thumbnail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "name": {"title": "Ms", "first": "Ada", "last": "Lovelace"},
            "email": "ada.lovelace@example.com",
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/1.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
            }
        })
    }

    #[test]
    fn test_deserializes_api_shape() {
        let user: UserRecord = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(user.name.title, "Ms");
        assert_eq!(user.name.first, "Ada");
        assert_eq!(user.name.last, "Lovelace");
        assert_eq!(user.email, "ada.lovelace@example.com");
        assert!(user.picture.thumbnail.contains("/thumb/"));
    }

    #[test]
    fn test_serializes_back_to_same_shape() {
        let user: UserRecord = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(serde_json::to_value(&user).unwrap(), sample_json());
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let mut value = sample_json();
        value["gender"] = json!("female");
        let user: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(user.email, "ada.lovelace@example.com");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("email");
        assert!(serde_json::from_value::<UserRecord>(value).is_err());
    }

    #[test]
    fn test_equality_is_structural() {
        let a: UserRecord = serde_json::from_value(sample_json()).unwrap();
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.email = "someone.else@example.com".to_string();
        assert_ne!(a, c);
    }

    #[test]
    fn test_full_name() {
        let name = Name {
            title: "Mr".to_string(),
            first: "John".to_string(),
            last: "Smith".to_string(),
        };
        assert_eq!(name.full_name(), "Mr John Smith");
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let name = Name {
            title: String::new(),
            first: "Jane".to_string(),
            last: " Doe ".to_string(),
        };
        assert_eq!(name.full_name(), "Jane Doe");
    }
}
