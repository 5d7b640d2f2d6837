//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_regions")]
    pub regions: Vec<RegionConfig>,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            regions: default_regions(),
            session: SessionConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// A named UI region and whether it starts out busy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    #[serde(default)]
    pub busy: bool,
}

/// Session settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Start timestamp (`YYYY-MM-DD HH:MM:SS`). Absent means "now".
    #[serde(default)]
    pub start_time: Option<String>,
}

/// Status-line appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_start_time: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_start_time: default_true(),
        }
    }
}

fn default_regions() -> Vec<RegionConfig> {
    vec![
        RegionConfig {
            name: "timer".into(),
            busy: true,
        },
        RegionConfig {
            name: "reports".into(),
            busy: true,
        },
        RegionConfig {
            name: "loading_bar".into(),
            busy: false,
        },
    ]
}

fn default_true() -> bool {
    true
}
