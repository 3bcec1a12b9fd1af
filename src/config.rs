//! Process configuration, read once at startup.

use std::time::Duration;

use lettre::message::Mailbox;
use tracing::info;

use crate::pricing::PricingVariant;

const DEFAULT_PORT: u16 = 5009;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Operator mailbox: sender, recipient, and SMTP username
    pub email_user: String,
    pub email_pass: String,
    pub smtp_host: String,
    pub mail_timeout: Duration,
    pub pricing_variant: PricingVariant,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("email_user", &self.email_user)
            .field("email_pass", &"<redacted>")
            .field("smtp_host", &self.smtp_host)
            .field("mail_timeout", &self.mail_timeout)
            .field("pricing_variant", &self.pricing_variant)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => {
                info!("PORT not set, using default: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let email_user = get("EMAIL_USER").ok_or(ConfigError::Missing("EMAIL_USER"))?;
        email_user
            .parse::<Mailbox>()
            .map_err(|e| ConfigError::Invalid {
                key: "EMAIL_USER",
                reason: e.to_string(),
            })?;

        let email_pass = get("EMAIL_PASS").ok_or(ConfigError::Missing("EMAIL_PASS"))?;

        let smtp_host = get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());

        let timeout_secs = match get("MAIL_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "MAIL_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "MAIL_TIMEOUT_SECS",
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAIL_TIMEOUT_SECS,
        };

        let pricing_variant = match get("PRICING_VARIANT") {
            Some(raw) => raw.parse().map_err(|e: crate::pricing::UnknownVariant| {
                ConfigError::Invalid {
                    key: "PRICING_VARIANT",
                    reason: e.to_string(),
                }
            })?,
            None => PricingVariant::default(),
        };

        Ok(Self {
            port,
            email_user,
            email_pass,
            smtp_host,
            mail_timeout: Duration::from_secs(timeout_secs),
            pricing_variant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const CREDENTIALS: [(&str, &str); 2] = [("EMAIL_USER", "ops@example.com"), ("EMAIL_PASS", "secret")];

    #[test]
    fn test_defaults() {
        let config = load(&CREDENTIALS).unwrap();
        assert_eq!(config.port, 5009);
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.mail_timeout, Duration::from_secs(15));
        assert_eq!(config.pricing_variant, PricingVariant::PerSquareFoot);
    }

    #[test]
    fn test_overrides() {
        let mut vars = CREDENTIALS.to_vec();
        vars.extend([
            ("PORT", "8080"),
            ("SMTP_HOST", "smtp.example.com"),
            ("MAIL_TIMEOUT_SECS", "3"),
            ("PRICING_VARIANT", "service-type"),
        ]);
        let config = load(&vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.smtp_host, "smtp.example.com");
        assert_eq!(config.mail_timeout, Duration::from_secs(3));
        assert_eq!(config.pricing_variant, PricingVariant::ServiceType);
    }

    #[test]
    fn test_missing_credentials() {
        let err = load(&[("EMAIL_USER", "ops@example.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EMAIL_PASS")));

        let err = load(&[("EMAIL_USER", " "), ("EMAIL_PASS", "secret")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EMAIL_USER")));
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            ("PORT", "eighty"),
            ("MAIL_TIMEOUT_SECS", "0"),
            ("PRICING_VARIANT", "z"),
            ("EMAIL_USER", "not an address"),
        ];
        for (key, value) in cases {
            let mut vars = CREDENTIALS.to_vec();
            vars.push((key, value));
            let err = load(&vars).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { key: k, .. } if k == key),
                "{key}={value} should be invalid"
            );
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = load(&CREDENTIALS).unwrap();
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
