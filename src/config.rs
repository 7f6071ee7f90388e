use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Contact form
    pub contact_endpoint: String,
    pub contact_access_key: Option<String>,
    pub contact_subject: String,
    pub contact_timeout_secs: u64,

    // Locale persistence
    pub preferences_path: String,

    // Notifications
    pub notification_ttl_secs: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Contact form (Web3Forms)
            contact_endpoint: std::env::var("CONTACT_ENDPOINT")
                .unwrap_or_else(|_| "https://api.web3forms.com/submit".to_string()),
            // Only needed to submit the contact form
            contact_access_key: std::env::var("CONTACT_ACCESS_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            contact_subject: std::env::var("CONTACT_SUBJECT")
                .unwrap_or_else(|_| "New Contact from Portfolio Website".to_string()),
            contact_timeout_secs: std::env::var("CONTACT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),

            // Locale persistence
            preferences_path: std::env::var("PREFERENCES_PATH")
                .unwrap_or_else(|_| ".portfolio/preferences.json".to_string()),

            // Notifications
            notification_ttl_secs: match std::env::var("NOTIFICATION_TTL_SECS") {
                Ok(value) => value.trim().parse::<u32>().with_context(|| {
                    format!(
                        "NOTIFICATION_TTL_SECS must be a whole number of seconds between 0 and {}, got '{}'",
                        u32::MAX,
                        value
                    )
                })?,
                Err(_) => 4,
            },
        })
    }
}
