//! Application and user credentials.

use secrecy::SecretString;

/// Application (consumer) credentials, issued per registered app.
#[derive(Clone)]
pub struct ConsumerCredentials {
    key: String,
    secret: SecretString,
}

impl ConsumerCredentials {
    /// Create consumer credentials from the app's API key and secret.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// The consumer (API) key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The consumer secret.
    ///
    /// Read it with [`expose_secret`](secrecy::ExposeSecret::expose_secret).
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

/// User (access token) credentials, obtained when a user authorizes the app.
#[derive(Clone)]
pub struct AccessCredentials {
    token: String,
    secret: SecretString,
}

impl AccessCredentials {
    /// Create access credentials from a token and its secret.
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// The access token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The access token secret.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

impl std::fmt::Debug for ConsumerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsumerCredentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for AccessCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCredentials")
            .field("token", &self.token)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
