use pulse_domain::Granularity;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Stores user-configurable dashboard preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default, deserialize_with = "lenient_granularity")]
    pub default_granularity: Granularity,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_snapshot: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory holding snapshot files. Defaults to `~/Documents/BudgetPulse`.
    pub default_snapshot_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            currency_symbol: Self::default_currency_symbol(),
            default_granularity: Granularity::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            last_snapshot: None,
            default_snapshot_root: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_default_snapshot_root(&self) -> PathBuf {
        if let Some(path) = &self.default_snapshot_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("BudgetPulse")
    }

    /// Snapshot used when none is given explicitly: the last opened one, or
    /// `snapshot.json` under the snapshot root.
    pub fn resolve_snapshot_path(&self) -> PathBuf {
        self.last_snapshot
            .clone()
            .unwrap_or_else(|| self.resolve_default_snapshot_root().join("snapshot.json"))
    }
}

/// Unrecognised or null granularity names read as monthly.
fn lenient_granularity<'de, D>(deserializer: D) -> Result<Granularity, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|name| name.parse().ok())
        .unwrap_or_default())
}
