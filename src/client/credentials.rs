use crate::error::ReanaError;

/// Environment variable holding the REANA server base URL.
pub const SERVER_URL_VAR: &str = "REANA_SERVER_URL";
/// Environment variable holding the REANA access token.
pub const ACCESS_TOKEN_VAR: &str = "REANA_ACCESS_TOKEN";

/// Server location and access token used for every API request.
#[derive(Clone)]
pub struct Credentials {
    pub server_url: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(server_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Read credentials from the process environment.
    ///
    /// `REANA_SERVER_URL` is checked before `REANA_ACCESS_TOKEN`; an unset
    /// variable and an empty one are treated the same.
    pub fn from_env() -> Result<Self, ReanaError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReanaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ReanaError::MissingEnv(name))
        };

        let server_url = required(SERVER_URL_VAR)?;
        let access_token = required(ACCESS_TOKEN_VAR)?;

        Ok(Self {
            server_url,
            access_token,
        })
    }
}

// Keeps the token out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server_url", &self.server_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_both_present() {
        let creds = Credentials::from_lookup(lookup_from(&[
            (SERVER_URL_VAR, "https://reana.example.org"),
            (ACCESS_TOKEN_VAR, "secret"),
        ]))
        .unwrap();
        assert_eq!(creds.server_url, "https://reana.example.org");
        assert_eq!(creds.access_token, "secret");
    }

    #[test]
    fn test_missing_server_url_reported_first() {
        let err = Credentials::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ReanaError::MissingEnv(SERVER_URL_VAR)));
    }

    #[test]
    fn test_missing_token() {
        let err = Credentials::from_lookup(lookup_from(&[(
            SERVER_URL_VAR,
            "https://reana.example.org",
        )]))
        .unwrap_err();
        assert!(matches!(err, ReanaError::MissingEnv(ACCESS_TOKEN_VAR)));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Credentials::from_lookup(lookup_from(&[
            (SERVER_URL_VAR, ""),
            (ACCESS_TOKEN_VAR, "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ReanaError::MissingEnv(SERVER_URL_VAR)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("https://reana.example.org", "secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("reana.example.org"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        // SAFETY: serialized with the other environment-mutating tests
        unsafe {
            std::env::set_var(SERVER_URL_VAR, "https://localhost:30443");
            std::env::set_var(ACCESS_TOKEN_VAR, "env-token");
        }
        let creds = Credentials::from_env().unwrap();
        assert_eq!(creds.server_url, "https://localhost:30443");
        assert_eq!(creds.access_token, "env-token");

        unsafe {
            std::env::remove_var(ACCESS_TOKEN_VAR);
        }
        let err = Credentials::from_env().unwrap_err();
        assert!(matches!(err, ReanaError::MissingEnv(ACCESS_TOKEN_VAR)));

        unsafe {
            std::env::remove_var(SERVER_URL_VAR);
        }
    }
}
