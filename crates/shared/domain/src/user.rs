//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User record as served by the listing endpoint.
///
/// The external service is the source of truth; a `User` held by the console
/// is a cached copy that may be stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Externally assigned, unique, immutable identifier
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// "first last", the form the search predicate matches against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on full name or email.
    ///
    /// An empty query matches every user.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.full_name().to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}

/// Positions of the users in `users` that match `query`, in page order.
pub fn matching_indices(users: &[User], query: &str) -> Vec<usize> {
    users
        .iter()
        .enumerate()
        .filter(|(_, user)| user.matches(query))
        .map(|(index, _)| index)
        .collect()
}

/// Full replacement body for the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Echo returned by the update endpoint. Only logged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatedUser {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
        }
    }

    fn sample_page() -> Vec<User> {
        vec![
            user(1, "George", "Bluth", "george.bluth@reqres.in"),
            user(2, "Janet", "Weaver", "janet.weaver@reqres.in"),
            user(3, "Emma", "Wong", "emma.wong@reqres.in"),
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        let users = sample_page();
        assert_eq!(matching_indices(&users, ""), vec![0, 1, 2]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let users = sample_page();
        assert_eq!(matching_indices(&users, "george"), vec![0]);
        assert_eq!(matching_indices(&users, "WEAVER"), vec![1]);
    }

    #[test]
    fn query_spans_first_and_last_name() {
        let users = sample_page();
        assert_eq!(matching_indices(&users, "emma w"), vec![2]);
    }

    #[test]
    fn query_matches_email() {
        let users = sample_page();
        assert_eq!(matching_indices(&users, "janet.weaver@"), vec![1]);
        assert_eq!(matching_indices(&users, "@reqres.in"), vec![0, 1, 2]);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let users = sample_page();
        assert!(matching_indices(&users, "tobias").is_empty());
    }

    #[test]
    fn every_match_satisfies_predicate() {
        let users = sample_page();
        for query in ["e", "ON", "reqres", "x", " "] {
            for index in matching_indices(&users, query) {
                assert!(users[index].matches(query), "{query} / {index}");
            }
        }
    }

    #[test]
    fn update_is_seeded_from_user() {
        let george = user(1, "George", "Bluth", "george.bluth@reqres.in");
        let update = UserUpdate::from(&george);
        assert_eq!(update.first_name, "George");
        assert_eq!(update.last_name, "Bluth");
        assert_eq!(update.email, "george.bluth@reqres.in");
    }

    #[test]
    fn updated_user_reads_camel_case_timestamp() {
        let echo: UpdatedUser = serde_json::from_str(
            r#"{"first_name":"G","updatedAt":"2024-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(echo.first_name.as_deref(), Some("G"));
        assert_eq!(echo.updated_at.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert!(echo.email.is_none());
    }
}
