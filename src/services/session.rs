use std::{collections::HashMap, sync::Mutex};

use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use tracing::{debug, warn};

use crate::{models::user::{CurrentUser, Session}, schema::JWTClaims};

/// Resolves who is calling and ends their session.
pub trait SessionProvider: Send + Sync {
    /// Never fails: anything unusable resolves to an anonymous session.
    fn resolve(&self, bearer: Option<&str>) -> Session;

    fn logout(&self, session: &Session);
}

/// Sessions backed by HS256 tokens. Logged-out tokens are remembered until they expire.
pub struct JwtSessionProvider{
    decoding_key: DecodingKey,
    /// Revoked token mapped to its `exp`.
    revoked: Mutex<HashMap<String, usize>>,
}

impl JwtSessionProvider {
    pub fn new(secret: &str) -> Self {
        JwtSessionProvider{
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            revoked: Mutex::new(HashMap::new()),
        }
    }

    fn is_revoked(&self, token: &str) -> bool {
        match self.revoked.lock() {
            Ok(revoked) => revoked.contains_key(token),
            Err(poisoned) => poisoned.into_inner().contains_key(token),
        }
    }

    /// Drops entries whose token has already expired, then records `token` if it is still live.
    fn revoke(&self, token: String, exp: usize, now: usize) {
        let mut revoked = match self.revoked.lock() {
            Ok(revoked) => revoked,
            Err(poisoned) => poisoned.into_inner(),
        };
        revoked.retain(|_, expires| *expires > now);
        if exp > now {
            revoked.insert(token, exp);
        }
    }

    fn revoked_len(&self) -> usize {
        match self.revoked.lock() {
            Ok(revoked) => revoked.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl SessionProvider for JwtSessionProvider {
    fn resolve(&self, bearer: Option<&str>) -> Session {
        let Some(token) = bearer.map(|raw| raw.trim_start_matches("Bearer ").trim()).filter(|t| !t.is_empty()) else {
            return Session::anonymous();
        };

        if self.is_revoked(token) {
            debug!("session token was logged out");
            return Session::anonymous();
        }

        match decode::<JWTClaims>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => Session{
                authenticated: true,
                user: Some(CurrentUser{ name: data.claims.name, role: data.claims.role }),
                token: Some(token.to_string()),
                expires_at: Some(data.claims.exp),
            },
            Err(e) => {
                warn!(error = %e, "rejected session token");
                Session::anonymous()
            }
        }
    }

    fn logout(&self, session: &Session) {
        let (Some(token), Some(exp)) = (session.token.clone(), session.expires_at) else {
            return;
        };
        let now = usize::try_from(Utc::now().timestamp()).unwrap_or(0);
        self.revoke(token, exp, now);
        debug!(revoked = self.revoked_len(), "session token revoked");
    }
}

#[cfg(test)]
pub mod tests{
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::models::user::Role;

    use super::*;

    pub const TEST_SECRET: &str = "storefront-test-secret";

    pub fn issue_token(name: Option<&str>, role: Option<Role>) -> String {
        let tomorrow = Utc::now() + Duration::days(1);
        let claims = JWTClaims{
            sub: "learner@example.com".to_string(),
            exp: tomorrow.timestamp() as usize,
            name: name.map(str::to_string),
            role,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes())).unwrap()
    }

    #[test]
    fn missing_header_is_anonymous(){
        let provider = JwtSessionProvider::new(TEST_SECRET);
        assert_eq!(provider.resolve(None), Session::anonymous());
        assert_eq!(provider.resolve(Some("")), Session::anonymous());
    }

    #[test]
    fn valid_token_carries_name_and_role(){
        let provider = JwtSessionProvider::new(TEST_SECRET);
        let token = issue_token(Some("Ferris"), Some(Role::Instructor));

        let session = provider.resolve(Some(&format!("Bearer {token}")));

        assert!(session.authenticated);
        assert_eq!(session.user_name(), Some("Ferris"));
        assert_eq!(session.role(), Some(Role::Instructor));
        assert!(session.expires_at.is_some());
    }

    #[test]
    fn token_without_prefix_is_accepted(){
        let provider = JwtSessionProvider::new(TEST_SECRET);
        let token = issue_token(None, None);

        let session = provider.resolve(Some(&token));
        assert!(session.authenticated);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn token_signed_with_another_secret_is_anonymous(){
        let provider = JwtSessionProvider::new("some-other-secret");
        let token = issue_token(Some("Mallory"), Some(Role::Admin));

        assert!(!provider.resolve(Some(&token)).authenticated);
    }

    #[test]
    fn expired_revocations_are_pruned(){
        let provider = JwtSessionProvider::new(TEST_SECRET);

        provider.revoke("first".to_string(), 1_000, 500);
        provider.revoke("second".to_string(), 5_000, 900);
        assert_eq!(provider.revoked_len(), 2);

        provider.revoke("third".to_string(), 9_000, 2_000);
        assert_eq!(provider.revoked_len(), 2);
        assert!(!provider.is_revoked("first"));
        assert!(provider.is_revoked("second"));
        assert!(provider.is_revoked("third"));
    }

    #[test]
    fn already_expired_token_is_not_stored(){
        let provider = JwtSessionProvider::new(TEST_SECRET);
        let session = Session{
            authenticated: true,
            user: None,
            token: Some("stale".to_string()),
            expires_at: Some(1),
        };

        provider.logout(&session);
        assert_eq!(provider.revoked_len(), 0);
    }

    #[test]
    fn logout_revokes_the_token(){
        let provider = JwtSessionProvider::new(TEST_SECRET);
        let token = issue_token(Some("Ferris"), Some(Role::Learner));

        let session = provider.resolve(Some(&token));
        provider.logout(&session);

        assert_eq!(provider.resolve(Some(&token)), Session::anonymous());
        assert_eq!(provider.revoked_len(), 1);
    }
}
