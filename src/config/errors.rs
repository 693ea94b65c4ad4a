use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    /// A setting is present but violates its rule
    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },

    /// A setting could not be parsed into its type
    #[error("Failed to parse setting '{setting_name}': {error}")]
    ParseError { setting_name: String, error: String },
}

impl SettingsError {
    pub fn invalid(setting_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting_name: setting_name.into(),
            reason: reason.into(),
        }
    }
}
