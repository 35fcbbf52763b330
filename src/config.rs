//! Build-time configuration embedded with `option_env!`.
//!
//! The browser has no process environment, so service identifiers and the
//! form-mode flag are captured when the WASM bundle is compiled. Parsing goes
//! through [`AppConfig::from_lookup`] so tests can supply their own values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Serialize;

pub const DEFAULT_POEM_API_URL: &str = "https://poetrydb.org/random";
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown RESPONSE_FORM_MODE: {0} (expected 'sign-in' or 'manual-email')")]
    UnknownFormMode(String),
    #[error("unknown LOG_LEVEL: {0}")]
    UnknownLogLevel(String),
}

/// Which response-form variant the bundle is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// The recipient address comes from the signed-in identity.
    #[default]
    SignIn,
    /// No sign-in; the reader types the recipient address.
    ManualEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Firebase web-app options, serialized in the shape `initializeApp` expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
}

impl FirebaseConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub poem_endpoint: String,
    pub form_mode: FormMode,
    pub emailjs: EmailJsConfig,
    pub firebase: FirebaseConfig,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poem_endpoint: DEFAULT_POEM_API_URL.to_owned(),
            form_mode: FormMode::default(),
            emailjs: EmailJsConfig { endpoint: DEFAULT_EMAILJS_API_URL.to_owned(), ..EmailJsConfig::default() },
            firebase: FirebaseConfig::default(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Read the values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a flag holds an unrecognized value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| build_env(key).map(str::to_owned))
    }

    /// Build typed config from a key lookup.
    ///
    /// Optional (all have defaults):
    /// - `POEM_API_URL`
    /// - `RESPONSE_FORM_MODE`: `sign-in` (default) or `manual-email`
    /// - `EMAILJS_API_URL`, `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    /// - `FIREBASE_API_KEY`, `FIREBASE_AUTH_DOMAIN`, `FIREBASE_PROJECT_ID`, `FIREBASE_APP_ID`
    /// - `LOG_LEVEL`: default `info`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a flag holds an unrecognized value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let string = |key: &str| value(key).unwrap_or_default();

        let form_mode = parse_form_mode(value("RESPONSE_FORM_MODE").as_deref())?;
        let log_level = match value("LOG_LEVEL") {
            Some(raw) => log::Level::from_str(&raw).map_err(|_| ConfigError::UnknownLogLevel(raw))?,
            None => log::Level::Info,
        };

        Ok(Self {
            poem_endpoint: value("POEM_API_URL").unwrap_or_else(|| DEFAULT_POEM_API_URL.to_owned()),
            form_mode,
            emailjs: EmailJsConfig {
                endpoint: value("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_owned()),
                service_id: string("EMAILJS_SERVICE_ID"),
                template_id: string("EMAILJS_TEMPLATE_ID"),
                public_key: string("EMAILJS_PUBLIC_KEY"),
            },
            firebase: FirebaseConfig {
                api_key: string("FIREBASE_API_KEY"),
                auth_domain: string("FIREBASE_AUTH_DOMAIN"),
                project_id: string("FIREBASE_PROJECT_ID"),
                app_id: string("FIREBASE_APP_ID"),
            },
            log_level,
        })
    }
}

fn parse_form_mode(raw: Option<&str>) -> Result<FormMode, ConfigError> {
    match raw.unwrap_or("sign-in") {
        "sign-in" => Ok(FormMode::SignIn),
        "manual-email" => Ok(FormMode::ManualEmail),
        other => Err(ConfigError::UnknownFormMode(other.to_owned())),
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "POEM_API_URL" => option_env!("POEM_API_URL"),
        "RESPONSE_FORM_MODE" => option_env!("RESPONSE_FORM_MODE"),
        "EMAILJS_API_URL" => option_env!("EMAILJS_API_URL"),
        "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
        "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
        "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
        "FIREBASE_API_KEY" => option_env!("FIREBASE_API_KEY"),
        "FIREBASE_AUTH_DOMAIN" => option_env!("FIREBASE_AUTH_DOMAIN"),
        "FIREBASE_PROJECT_ID" => option_env!("FIREBASE_PROJECT_ID"),
        "FIREBASE_APP_ID" => option_env!("FIREBASE_APP_ID"),
        "LOG_LEVEL" => option_env!("LOG_LEVEL"),
        _ => None,
    }
}
