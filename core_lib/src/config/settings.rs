use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Mail variables read verbatim from the process environment, alongside the
/// `APP_`-prefixed overrides.
pub const SENDER_ADDRESS_VAR: &str = "SENDER_EMAIL_ADDRESS";
pub const APP_PASSWORD_VAR: &str = "GOOGLE_APP_PASS";
pub const RECEIVER_ADDRESSES_VAR: &str = "RECIVER_EMAIL_ADDRESS";
pub const RECEIVER_ADDRESSES_ALT_VAR: &str = "RECEIVER_EMAIL_ADDRESS";
pub const EMAIL_ENABLED_VAR: &str = "EMAIL_ENABLED";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub site: SiteConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub contact_body_limit_bytes: usize,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub enabled: bool,
    pub sender_address: Option<String>,
    pub app_password: Option<String>,
    /// Comma-separated list of inboxes that receive contact submissions.
    pub receiver_addresses: Option<String>,
    pub sender_name: String,
    pub subject: String,
    pub smtp_host: String,
    pub smtp_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub public_dir: PathBuf,
    pub gallery_initial_visible: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty means same-origin only.
    pub allowed_origins: Vec<String>,
    pub max_age_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            site: SiteConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            contact_body_limit_bytes: 64 * 1024,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sender_address: None,
            app_password: None,
            receiver_addresses: None,
            sender_name: "EHD Detailing Website".to_string(),
            subject: "Contact Form Submission".to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("./public"),
            gallery_initial_visible: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("enabled", &self.enabled)
            .field("sender_address", &self.sender_address)
            .field("app_password", &self.app_password.as_ref().map(|_| "<redacted>"))
            .field("receiver_addresses", &self.receiver_addresses)
            .field("sender_name", &self.sender_name)
            .field("subject", &self.subject)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

impl EmailConfig {
    /// The relay runs only when the switch is on and both sender credentials
    /// are present. Receivers are checked at send time.
    pub fn is_enabled(&self) -> bool {
        self.enabled && present(&self.sender_address) && present(&self.app_password)
    }

    pub fn receivers(&self) -> Vec<String> {
        self.receiver_addresses
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads defaults, `config.toml`, `APP_` overrides and finally the bare mail
    /// variables resolved through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        builder = apply_mail_env(builder, lookup)?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.contact_body_limit_bytes == 0 {
            return Err(ConfigError::Message(
                "Contact body limit must be greater than 0".to_string(),
            ));
        }

        if self.email.smtp_host.trim().is_empty() {
            return Err(ConfigError::Message("SMTP host cannot be empty".to_string()));
        }

        if self.email.smtp_port == 0 {
            return Err(ConfigError::Message("SMTP port cannot be 0".to_string()));
        }

        if self.email.is_enabled() {
            let sender = self.email.sender_address.as_deref().unwrap_or_default();
            if !sender.contains('@') {
                return Err(ConfigError::Message(format!(
                    "Sender email address '{}' is invalid",
                    sender
                )));
            }

            if self.email.receivers().is_empty() {
                tracing::warn!("Email relay is enabled but no receiver address is configured");
            }
        }

        if self.site.gallery_initial_visible == 0 {
            return Err(ConfigError::Message(
                "Gallery initial visible count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn apply_mail_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    builder = builder.set_override_option("email.sender_address", lookup(SENDER_ADDRESS_VAR))?;
    builder = builder.set_override_option("email.app_password", lookup(APP_PASSWORD_VAR))?;

    let receivers = lookup(RECEIVER_ADDRESSES_VAR).or_else(|| lookup(RECEIVER_ADDRESSES_ALT_VAR));
    builder = builder.set_override_option("email.receiver_addresses", receivers)?;

    if let Some(raw) = lookup(EMAIL_ENABLED_VAR) {
        let enabled = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            other => {
                return Err(ConfigError::Message(format!(
                    "{} must be a boolean, got '{}'",
                    EMAIL_ENABLED_VAR, other
                )))
            }
        };
        builder = builder.set_override("email.enabled", enabled)?;
    }

    Ok(builder)
}
