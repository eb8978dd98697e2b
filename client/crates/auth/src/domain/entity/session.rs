//! Session Entity
//!
//! Pairs an [`Identity`] with its [`AccessToken`]. Either both are present
//! or neither is; the private representation makes a half-session
//! unrepresentable.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::{access_token::AccessToken, role::Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    auth: Option<(Identity, AccessToken)>,
}

impl Session {
    /// No identity, no token
    pub const fn anonymous() -> Self {
        Self { auth: None }
    }

    pub fn authenticated(identity: Identity, token: AccessToken) -> Self {
        Self {
            auth: Some((identity, token)),
        }
    }

    /// Rebuild from independently stored halves.
    ///
    /// A partial pair collapses to [`Session::anonymous`].
    pub fn from_parts(identity: Option<Identity>, token: Option<AccessToken>) -> Self {
        match (identity, token) {
            (Some(identity), Some(token)) => Self::authenticated(identity, token),
            _ => Self::anonymous(),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.auth.as_ref().map(|(identity, _)| identity)
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.auth.as_ref().map(|(_, token)| token)
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::email::Email;

    fn identity() -> Identity {
        Identity::new(Role::User, Email::new("user@gmail.com").unwrap())
    }

    fn token() -> AccessToken {
        AccessToken::new("mock-jwt-user").unwrap()
    }

    #[test]
    fn test_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert!(session.token().is_none());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_authenticated() {
        let session = Session::authenticated(identity(), token());
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::User));
        assert_eq!(session.token().unwrap().expose(), "mock-jwt-user");
    }

    #[test]
    fn test_from_parts_never_partial() {
        for (identity, token) in [
            (None, None),
            (Some(identity()), None),
            (None, Some(token())),
            (Some(identity()), Some(token())),
        ] {
            let session = Session::from_parts(identity, token);
            assert_eq!(session.identity().is_some(), session.token().is_some());
        }
    }
}
