use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const NOTIFY_CHANNELS: &str = "NOTIFY_CHANNELS";
pub const SMTP_HOST: &str = "SMTP_HOST";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const SMTP_USER: &str = "SMTP_USER";
pub const SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const SMTP_USE_SSL: &str = "SMTP_USE_SSL";
pub const EMAIL_FROM: &str = "EMAIL_FROM";
pub const EMAIL_TO: &str = "EMAIL_TO";

/// Every key the notifier reads
pub const RECOGNIZED_KEYS: &[&str] = &[
    NOTIFY_CHANNELS,
    SMTP_HOST,
    SMTP_PORT,
    SMTP_USER,
    SMTP_PASSWORD,
    SMTP_USE_SSL,
    EMAIL_FROM,
    EMAIL_TO,
];

/// Implicit-TLS submission port
pub const DEFAULT_SMTP_PORT: u16 = 465;

const ENV_FILE_NAME: &str = ".env";

/// Resolve the dotenv file based on priority:
/// 1. Explicit path (`--env-file` / `TASKMAIL_ENV_FILE`), used even if missing
/// 2. `.env` next to the executable
/// 3. `<config dir>/taskmail/.env`
pub fn resolve_env_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let candidate = dir.join(ENV_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("taskmail").join(ENV_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

/// Raw key/value settings: process environment layered over a dotenv file
#[derive(Debug, Clone, Default)]
pub struct Settings {
    file: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl Settings {
    pub fn new(file: HashMap<String, String>, env: HashMap<String, String>) -> Self {
        Self { file, env }
    }

    /// Load the recognized keys from the process environment and `env_file`.
    ///
    /// A missing file is an empty source. Malformed lines are skipped.
    pub fn load(env_file: Option<&Path>) -> Self {
        let file = env_file.map(read_env_file).unwrap_or_default();
        let env = RECOGNIZED_KEYS
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self { file, env }
    }

    /// Value for `key`; the environment wins, blank values count as unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.env
            .get(key)
            .or_else(|| self.file.get(key))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

fn read_env_file(path: &Path) -> HashMap<String, String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "no env file loaded");
            return HashMap::new();
        }
    };

    let mut values = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping malformed env line");
            }
        }
    }
    values
}

/// Notifier configuration, populated once at start-up.
///
/// Missing SMTP settings are a valid state: the email channel is simply
/// unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    pub channels: Vec<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_use_tls: bool,
    pub email_from: Option<String>,
    pub email_to: Vec<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: None,
            smtp_password: None,
            smtp_use_tls: true,
            email_from: None,
            email_to: Vec::new(),
        }
    }
}

impl NotifyConfig {
    pub fn load(env_file: Option<&Path>) -> Self {
        Self::from_settings(&Settings::load(env_file))
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let smtp_port = match settings.get(SMTP_PORT) {
            None => DEFAULT_SMTP_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = raw, "invalid SMTP_PORT, using {}", DEFAULT_SMTP_PORT);
                DEFAULT_SMTP_PORT
            }),
        };

        let smtp_use_tls = settings
            .get(SMTP_USE_SSL)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Self {
            channels: split_list(settings.get(NOTIFY_CHANNELS))
                .into_iter()
                .map(|c| c.to_lowercase())
                .collect(),
            smtp_host: settings.get(SMTP_HOST).map(str::to_string),
            smtp_port,
            smtp_user: settings.get(SMTP_USER).map(str::to_string),
            smtp_password: settings.get(SMTP_PASSWORD).map(str::to_string),
            smtp_use_tls,
            email_from: settings.get(EMAIL_FROM).map(str::to_string),
            email_to: split_list(settings.get(EMAIL_TO)),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Complete SMTP settings required to send email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub use_tls: bool,
    pub from: String,
    pub to: Vec<String>,
}

impl EmailSettings {
    /// Extract email settings, naming every missing key on failure
    pub fn from_config(config: &NotifyConfig) -> Result<Self> {
        let mut missing = Vec::new();
        if config.smtp_host.is_none() {
            missing.push(SMTP_HOST);
        }
        if config.smtp_user.is_none() {
            missing.push(SMTP_USER);
        }
        if config.smtp_password.is_none() {
            missing.push(SMTP_PASSWORD);
        }
        if config.email_from.is_none() {
            missing.push(EMAIL_FROM);
        }
        if config.email_to.is_empty() {
            missing.push(EMAIL_TO);
        }

        match (
            &config.smtp_host,
            &config.smtp_user,
            &config.smtp_password,
            &config.email_from,
        ) {
            (Some(host), Some(user), Some(password), Some(from)) if missing.is_empty() => {
                Ok(Self {
                    host: host.clone(),
                    port: config.smtp_port,
                    user: user.clone(),
                    password: password.clone(),
                    use_tls: config.smtp_use_tls,
                    from: from.clone(),
                    to: config.email_to.clone(),
                })
            }
            _ => Err(Error::Config(format!("missing {}", missing.join(", ")))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_file() -> HashMap<String, String> {
        map(&[
            (NOTIFY_CHANNELS, "Email, ,"),
            (SMTP_HOST, "smtp.example.com"),
            (SMTP_USER, "bot@example.com"),
            (SMTP_PASSWORD, "secret"),
            (EMAIL_FROM, "bot@example.com"),
            (EMAIL_TO, "a@example.com, b@example.com,"),
        ])
    }

    #[test]
    fn test_config_default() {
        let config = NotifyConfig::from_settings(&Settings::default());
        assert_eq!(config, NotifyConfig::default());
        assert!(config.channels.is_empty());
        assert!(EmailSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_full_settings() {
        let config = NotifyConfig::from_settings(&Settings::new(full_file(), HashMap::new()));

        assert_eq!(config.channels, vec!["email"]);
        assert_eq!(config.smtp_port, 465);
        assert!(config.smtp_use_tls);
        assert_eq!(config.email_to, vec!["a@example.com", "b@example.com"]);

        let email = EmailSettings::from_config(&config).unwrap();
        assert_eq!(email.host, "smtp.example.com");
        assert_eq!(email.to.len(), 2);
    }

    #[test]
    fn test_environment_overrides_file() {
        let env = map(&[(SMTP_HOST, "override.example.com"), (SMTP_PORT, "587"), (SMTP_USE_SSL, "false")]);
        let config = NotifyConfig::from_settings(&Settings::new(full_file(), env));

        assert_eq!(config.smtp_host.as_deref(), Some("override.example.com"));
        assert_eq!(config.smtp_port, 587);
        assert!(!config.smtp_use_tls);
    }

    #[test]
    fn test_blank_environment_value_counts_as_unset() {
        let env = map(&[(SMTP_PASSWORD, "  ")]);
        let config = NotifyConfig::from_settings(&Settings::new(HashMap::new(), env));
        assert_eq!(config.smtp_password, None);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let file = map(&[(SMTP_PORT, "not-a-port")]);
        let config = NotifyConfig::from_settings(&Settings::new(file, HashMap::new()));
        assert_eq!(config.smtp_port, DEFAULT_SMTP_PORT);
    }

    #[test]
    fn test_missing_keys_are_named() {
        let mut file = full_file();
        file.remove(SMTP_PASSWORD);
        file.remove(EMAIL_TO);
        let config = NotifyConfig::from_settings(&Settings::new(file, HashMap::new()));

        let err = EmailSettings::from_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: missing SMTP_PASSWORD, EMAIL_TO");
    }

    #[test]
    fn test_read_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# notifier\nNOTIFY_CHANNELS=email\n\nSMTP_HOST=smtp.example.com\nEMAIL_TO=\"x@example.com\"\n",
        )
        .unwrap();

        let values = read_env_file(&path);
        assert_eq!(values.get(NOTIFY_CHANNELS).map(String::as_str), Some("email"));
        assert_eq!(values.get(SMTP_HOST).map(String::as_str), Some("smtp.example.com"));
        assert_eq!(values.get(EMAIL_TO).map(String::as_str), Some("x@example.com"));
    }

    #[test]
    fn test_missing_env_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_env_file(&dir.path().join("absent.env")).is_empty());
    }

    #[test]
    fn test_explicit_env_file_wins() {
        let path = Path::new("/does/not/exist/.env");
        assert_eq!(resolve_env_file(Some(path)), Some(path.to_path_buf()));
    }
}
