//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quoted and escaped TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# termfolio configuration

# Theme preference file (the light/dark choice is stored there, not here)
{preferences_path}
# ─────────────────────────────────────────────────────────────────────────────
# CONTACT FORM MAIL RELAY
# ─────────────────────────────────────────────────────────────────────────────
# Messages are delivered through the EmailJS REST API.
# Env vars TERMFOLIO_RELAY_* override every key below.
[relay]
endpoint = {endpoint}
service_id = {service_id}
template_id = {template_id}
public_key = {public_key}
{access_token}
# Presentation (TERMFOLIO_NO_ANIMATION=1 disables animations)
[ui]
animations = {animations}
menu_transition_frames = {menu_frames}
tick_ms = {tick_ms}

# Downloadable files
[assets]
{resume}
# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = {log_level}
# Operator log file (JSON lines). Relay failures are recorded here.
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            preferences_path = self
                .preferences_path
                .as_ref()
                .map(|p| format!("preferences_path = {}\n", toml_string(&p.display().to_string())))
                .unwrap_or_else(|| {
                    "# preferences_path = \"~/.config/termfolio/preferences.toml\"\n".to_string()
                }),
            endpoint = toml_string(&self.relay.endpoint),
            service_id = toml_string(&self.relay.service_id),
            template_id = toml_string(&self.relay.template_id),
            public_key = toml_string(&self.relay.public_key),
            access_token = self
                .relay
                .access_token
                .as_ref()
                .map(|t| format!("access_token = {}\n", toml_string(t)))
                .unwrap_or_else(|| "# access_token = \"...\"\n".to_string()),
            animations = self.ui.animations,
            menu_frames = self.ui.menu_transition_frames,
            tick_ms = self.ui.tick_ms,
            resume = self
                .assets
                .resume
                .as_ref()
                .map(|p| format!("resume = {}\n", toml_string(&p.display().to_string())))
                .unwrap_or_else(|| "# resume = \"~/Documents/resume.pdf\"\n".to_string()),
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string().replace('\\', "/")),
            log_file_rotation = toml_string(self.logging.file_rotation.as_str()),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
