use serde::{Deserialize, Serialize};

/// The signed-in user for the current session.
///
/// Fabricated entirely client-side by the login/signup flows; there is no
/// credential store behind it. Non-`None` on the app state iff the user is
/// "authenticated" for this session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    /// Session user produced by a login. The display name is the part of the
    /// email before the first `@`.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: "1".to_string(),
            email: email.to_string(),
            name,
        }
    }

    /// Session user produced by a signup, using the supplied name verbatim.
    pub fn with_name(email: &str, name: &str) -> Self {
        Self {
            id: "1".to_string(),
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_takes_local_part() {
        let user = User::from_email("alex@university.edu");
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "alex@university.edu");
        assert_eq!(user.name, "alex");
    }

    #[test]
    fn test_from_email_without_at_sign_uses_whole_string() {
        let user = User::from_email("no-at-sign");
        assert_eq!(user.name, "no-at-sign");
    }

    #[test]
    fn test_from_email_takes_segment_before_first_at() {
        let user = User::from_email("a@b@c");
        assert_eq!(user.name, "a");
    }

    #[test]
    fn test_with_name_is_verbatim() {
        let user = User::with_name("a@b.edu", "Alex Chen");
        assert_eq!(user.name, "Alex Chen");
        assert_eq!(user.email, "a@b.edu");
    }
}
