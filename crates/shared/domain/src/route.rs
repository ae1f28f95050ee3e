//! Navigation surface: the three named views and the edit handoff.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::user::User;

/// Named views of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Login,
    /// `/users`
    Users,
    /// `/edit-user/{id}`
    EditUser(u32),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Users => "/users".to_string(),
            Route::EditUser(id) => format!("/edit-user/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = DomainError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Login);
        }
        if trimmed == "/users" {
            return Ok(Route::Users);
        }
        if let Some(id) = trimmed.strip_prefix("/edit-user/") {
            return id
                .parse()
                .map(Route::EditUser)
                .map_err(|_| DomainError::UnknownRoute(path.to_string()));
        }
        Err(DomainError::UnknownRoute(path.to_string()))
    }
}

/// Typed handoff from the directory to the editor.
///
/// Carries the full record so the editor never re-fetches it. The copy is
/// detached: it is not re-validated against the server before an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHandoff {
    user: User,
}

impl EditHandoff {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn route(&self) -> Route {
        Route::EditUser(self.user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Login);
        assert_eq!("".parse::<Route>().unwrap(), Route::Login);
        assert_eq!("/users".parse::<Route>().unwrap(), Route::Users);
        assert_eq!("/users/".parse::<Route>().unwrap(), Route::Users);
        assert_eq!("/edit-user/7".parse::<Route>().unwrap(), Route::EditUser(7));
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(matches!(
            "/admin".parse::<Route>(),
            Err(DomainError::UnknownRoute(_))
        ));
        assert!("/edit-user/abc".parse::<Route>().is_err());
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Login, Route::Users, Route::EditUser(12)] {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }
}
