//! Runtime settings loader for slot-gateway.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/packages/conf/slot.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/slot-gateway/slot.yaml`
//!
//! Merge precedence is user over system. A `prizes` list replaces the built-in
//! default set wholesale; lists are never merged entry by entry.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use slot_prizes::{Prize, ValidationError, default_prizes, validate_payload};

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "packages/conf/slot.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "slot-gateway/slot.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotSettings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub draw: DrawSettings,
    /// Initial prize set as written in YAML; `None` means the built-in defaults.
    /// Checked by [`SlotSettings::initial_prizes`], not at parse time.
    pub prizes: Option<serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewaySettings {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawSettings {
    /// Seed for reproducible draws; unset uses the thread-local generator.
    pub seed: Option<u64>,
}

impl SlotSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            gateway: self.gateway.merge(overlay.gateway),
            draw: self.draw.merge(overlay.draw),
            prizes: overlay.prizes.or(self.prizes),
        }
    }

    /// Prize set the registry starts with.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] when the configured list has the wrong shape or fails
    /// the same checks as a runtime replace.
    pub fn initial_prizes(&self) -> Result<Vec<Prize>, ValidationError> {
        let Some(raw) = &self.prizes else {
            return Ok(default_prizes());
        };
        let payload = serde_json::to_value(raw).map_err(|error| {
            ValidationError::MalformedPayload(format!("configured prizes are not plain data: {error}"))
        })?;
        validate_payload(&payload)
    }
}

impl GatewaySettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            bind: overlay.bind.or(self.bind),
        }
    }
}

impl DrawSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            seed: overlay.seed.or(self.seed),
        }
    }
}

/// Load merged settings (user overrides system).
#[must_use]
pub fn load_slot_settings() -> SlotSettings {
    let (system_path, user_path) = slot_settings_paths();
    load_slot_settings_from_paths(&system_path, &user_path)
}

#[doc(hidden)]
#[must_use]
pub fn slot_settings_paths() -> (PathBuf, PathBuf) {
    let root = env_dir("PRJ_ROOT")
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let config_home = CONFIG_HOME_OVERRIDE
        .get()
        .cloned()
        .or_else(|| env_dir("PRJ_CONFIG_HOME"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_HOME_RELATIVE_PATH));
    (
        root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH),
        // `join` keeps an absolute config home as is.
        root.join(config_home).join(DEFAULT_USER_SETTINGS_RELATIVE_PATH),
    )
}

#[doc(hidden)]
#[must_use]
pub fn load_slot_settings_from_paths(system: &Path, user: &Path) -> SlotSettings {
    let system_settings = read_layer(system, "system");
    let user_settings = read_layer(user, "user");
    system_settings.merge(user_settings)
}

fn read_layer(path: &Path, layer: &'static str) -> SlotSettings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(layer, path = %path.display(), "no slot settings file");
            return SlotSettings::default();
        }
        Err(error) => {
            tracing::warn!(
                layer,
                path = %path.display(),
                error = %error,
                "slot settings unreadable; skipping layer"
            );
            return SlotSettings::default();
        }
    };
    serde_yaml::from_str(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            layer,
            path = %path.display(),
            error = %error,
            "slot settings yaml invalid; skipping layer"
        );
        SlotSettings::default()
    })
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Point the user settings layer at `<dir>/slot-gateway/slot.yaml` (CLI `--conf`).
///
/// Relative paths resolve against `PRJ_ROOT`, or the working directory. First call wins.
pub fn set_config_home_override(dir: impl Into<PathBuf>) {
    let dir = dir.into();
    if dir.as_os_str().is_empty() {
        return;
    }
    if let Err(rejected) = CONFIG_HOME_OVERRIDE.set(dir)
        && CONFIG_HOME_OVERRIDE.get() != Some(&rejected)
    {
        tracing::warn!(
            ignored = %rejected.display(),
            "slot config home already chosen; ignoring later --conf"
        );
    }
}
