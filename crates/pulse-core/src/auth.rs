// SPDX-License-Identifier: Apache-2.0

//! Credential resolution.
//!
//! The `TokenProvider` trait abstracts where secrets come from. The server uses
//! [`EnvTokenProvider`]; tests substitute their own provider. Secrets are resolved
//! once into [`Credentials`] at startup and passed explicitly to the clients.

use secrecy::SecretString;

use crate::error::PulseError;

/// Environment variable holding the GitHub API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the AI provider API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Provides GitHub and AI provider credentials for API calls.
///
/// Implementations return `None` if a credential is not available.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    fn github_token(&self) -> Option<SecretString>;

    /// Retrieves the AI provider API key.
    fn ai_api_key(&self) -> Option<SecretString>;
}

/// Resolves credentials from environment variables.
///
/// Reads `GITHUB_TOKEN` and `OPENAI_API_KEY`. Empty values count as unset.
pub struct EnvTokenProvider;

impl EnvTokenProvider {
    fn read(var: &str) -> Option<SecretString> {
        std::env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(SecretString::from)
    }
}

impl TokenProvider for EnvTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        Self::read(GITHUB_TOKEN_ENV)
    }

    fn ai_api_key(&self) -> Option<SecretString> {
        Self::read(OPENAI_API_KEY_ENV)
    }
}

/// Both secrets the service needs, resolved once at startup.
#[derive(Clone)]
pub struct Credentials {
    /// Bearer token for the GitHub API.
    pub github_token: SecretString,
    /// API key for the AI provider.
    pub ai_api_key: SecretString,
}

impl Credentials {
    /// Resolves both secrets from a provider.
    ///
    /// # Errors
    ///
    /// Returns `PulseError::MissingCredential` naming the first absent secret.
    pub fn resolve(provider: &dyn TokenProvider) -> crate::Result<Self> {
        let github_token = provider
            .github_token()
            .ok_or_else(|| PulseError::MissingCredential {
                env_var: GITHUB_TOKEN_ENV.to_string(),
            })?;
        let ai_api_key = provider
            .ai_api_key()
            .ok_or_else(|| PulseError::MissingCredential {
                env_var: OPENAI_API_KEY_ENV.to_string(),
            })?;

        Ok(Self {
            github_token,
            ai_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    struct MockTokenProvider {
        github_token: Option<SecretString>,
        ai_api_key: Option<SecretString>,
    }

    impl TokenProvider for MockTokenProvider {
        fn github_token(&self) -> Option<SecretString> {
            self.github_token.clone()
        }

        fn ai_api_key(&self) -> Option<SecretString> {
            self.ai_api_key.clone()
        }
    }

    #[test]
    fn resolve_with_both_secrets() {
        let provider = MockTokenProvider {
            github_token: Some(SecretString::from("ghp_test")),
            ai_api_key: Some(SecretString::from("sk-test")),
        };

        let creds = Credentials::resolve(&provider).expect("should resolve");
        assert_eq!(creds.github_token.expose_secret(), "ghp_test");
        assert_eq!(creds.ai_api_key.expose_secret(), "sk-test");
    }

    #[test]
    fn resolve_fails_without_github_token() {
        let provider = MockTokenProvider {
            github_token: None,
            ai_api_key: Some(SecretString::from("sk-test")),
        };

        let err = Credentials::resolve(&provider).err().expect("should fail");
        assert!(matches!(
            err,
            PulseError::MissingCredential { ref env_var } if env_var == GITHUB_TOKEN_ENV
        ));
    }

    #[test]
    fn resolve_fails_without_ai_key() {
        let provider = MockTokenProvider {
            github_token: Some(SecretString::from("ghp_test")),
            ai_api_key: None,
        };

        let err = Credentials::resolve(&provider).err().expect("should fail");
        assert!(matches!(
            err,
            PulseError::MissingCredential { ref env_var } if env_var == OPENAI_API_KEY_ENV
        ));
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)]
    fn env_provider_treats_empty_as_unset() {
        // SAFETY: serialized test; no other threads touch these vars.
        unsafe {
            std::env::set_var(GITHUB_TOKEN_ENV, "  ");
            std::env::remove_var(OPENAI_API_KEY_ENV);
        }

        let provider = EnvTokenProvider;
        assert!(provider.github_token().is_none());
        assert!(provider.ai_api_key().is_none());

        unsafe {
            std::env::remove_var(GITHUB_TOKEN_ENV);
        }
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)]
    fn env_provider_reads_set_vars() {
        // SAFETY: serialized test; no other threads touch these vars.
        unsafe {
            std::env::set_var(GITHUB_TOKEN_ENV, "ghp_env");
            std::env::set_var(OPENAI_API_KEY_ENV, "sk-env");
        }

        let creds = Credentials::resolve(&EnvTokenProvider).expect("should resolve");
        assert_eq!(creds.github_token.expose_secret(), "ghp_env");
        assert_eq!(creds.ai_api_key.expose_secret(), "sk-env");

        unsafe {
            std::env::remove_var(GITHUB_TOKEN_ENV);
            std::env::remove_var(OPENAI_API_KEY_ENV);
        }
    }
}
