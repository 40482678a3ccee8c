use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use prep_core::model::{User, UserId};
use storage::repository::KeyValueStore;

use crate::Clock;
use crate::error::AuthError;
use crate::id_source::IdSource;

/// Key under which the signed-in identity is persisted.
pub const USER_KEY: &str = "user";

pub const DEMO_USERNAME: &str = "demo_user";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_USER_ID: UserId = UserId::new(1);

/// The identity handed out for the demo credentials.
#[must_use]
pub fn demo_user() -> User {
    User::new(DEMO_USER_ID, DEMO_USERNAME, "Demo User", "demo@example.com")
}

/// Tuning for the stubbed auth backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// Delay applied before every login and signup.
    pub simulated_latency: Duration,
}

impl AuthConfig {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

    /// No simulated latency, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_latency(simulated_latency: Duration) -> Self {
        Self { simulated_latency }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_latency(Self::DEFAULT_LATENCY)
    }
}

/// Holds the signed-in identity and mirrors it into the key-value store.
pub struct SessionStore {
    config: AuthConfig,
    kv: Arc<dyn KeyValueStore>,
    current: Mutex<Option<User>>,
    ids: IdSource,
}

impl SessionStore {
    #[must_use]
    pub fn new(clock: Clock, config: AuthConfig, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            kv,
            current: Mutex::new(None),
            ids: IdSource::new(clock, DEMO_USER_ID.value()),
        }
    }

    #[must_use]
    pub fn config(&self) -> AuthConfig {
        self.config
    }

    /// The identity currently held in memory.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Restore a previously persisted identity.
    ///
    /// A record that cannot be decoded is removed and treated as absent.
    /// Signup never reissues the id of a restored identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the store cannot be read or the bad
    /// record cannot be cleared.
    pub async fn init(&self) -> Result<Option<User>, AuthError> {
        let Some(raw) = self.kv.get(USER_KEY).await? else {
            tracing::debug!("no persisted session");
            self.replace(None);
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, username = %user.username, "restored session");
                self.ids.observe(user.id.value());
                self.replace(Some(user.clone()));
                Ok(Some(user))
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session record");
                self.kv.clear(USER_KEY).await?;
                self.replace(None);
                Ok(None)
            }
        }
    }

    /// Sign in with the demo credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any other pair, leaving the
    /// current identity untouched. Returns `AuthError::Storage` if the
    /// identity cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        self.simulate_latency().await;

        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            tracing::info!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let user = demo_user();
        self.persist(&user).await?;
        self.replace(Some(user.clone()));
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(user)
    }

    /// Create a fresh identity from the form values and sign it in.
    ///
    /// The password is accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the identity cannot be persisted.
    pub async fn signup(
        &self,
        username: &str,
        _password: &str,
        email: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        self.simulate_latency().await;

        let user = User::new(UserId::new(self.ids.next()), username, name, email);
        self.persist(&user).await?;
        self.replace(Some(user.clone()));
        tracing::info!(user_id = %user.id, username = %user.username, "signed up");
        Ok(user)
    }

    /// Forget the identity in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the persisted record cannot be cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let previous = self.replace(None);
        self.kv.clear(USER_KEY).await?;
        if let Some(user) = previous {
            tracing::info!(user_id = %user.id, "logged out");
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }

    async fn persist(&self, user: &User) -> Result<(), AuthError> {
        let snapshot = serde_json::to_string(user)?;
        self.kv.set(USER_KEY, &snapshot).await?;
        Ok(())
    }

    fn replace(&self, user: Option<User>) -> Option<User> {
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, user)
    }
}
