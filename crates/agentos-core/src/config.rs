use crate::error::{AgentOsError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// PortsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortsConfig {
    #[serde(default = "default_api_port")]
    pub api: u16,
    #[serde(default = "default_design_port")]
    pub design: u16,
    #[serde(default = "default_app_port")]
    pub app: u16,
}

fn default_api_port() -> u16 {
    5403
}

fn default_design_port() -> u16 {
    5400
}

fn default_app_port() -> u16 {
    5402
}

impl Default for PortsConfig {
    fn default() -> Self {
        Self {
            api: default_api_port(),
            design: default_design_port(),
            app: default_app_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// PathsConfig
// ---------------------------------------------------------------------------

/// Directory names relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_agent_os_dir")]
    pub agent_os: String,
    #[serde(default = "default_app_dir")]
    pub app: String,
    #[serde(default = "default_design_dir")]
    pub design: String,
    #[serde(default = "default_product_plan_dir")]
    pub product_plan: String,
}

fn default_agent_os_dir() -> String {
    paths::AGENT_OS_DIR.to_string()
}

fn default_app_dir() -> String {
    paths::APP_DIR.to_string()
}

fn default_design_dir() -> String {
    paths::DESIGN_DIR.to_string()
}

fn default_product_plan_dir() -> String {
    paths::PRODUCT_PLAN_DIR.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            agent_os: default_agent_os_dir(),
            app: default_app_dir(),
            design: default_design_dir(),
            product_plan: default_product_plan_dir(),
        }
    }
}

// ---------------------------------------------------------------------------
// ProbeConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_probe_host")]
    pub host: String,
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_probe_host() -> String {
    "localhost".to_string()
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: default_probe_host(),
            timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

/// Process-wide settings, built once at startup and handed to each component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ports: PortsConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Config {
    /// Load `control-center.yaml` from the project root. A missing file is
    /// not an error: every field has a default.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let ports = [
            ("api", self.ports.api),
            ("design", self.ports.design),
            ("app", self.ports.app),
        ];
        for (i, (a_name, a_port)) in ports.iter().enumerate() {
            for (b_name, b_port) in &ports[i + 1..] {
                if a_port == b_port && *a_port != 0 {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!(
                            "ports.{a_name} and ports.{b_name} are both {a_port}"
                        ),
                    });
                }
            }
        }

        if self.probe.timeout_ms == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "probe.timeout_ms must be greater than zero".to_string(),
            });
        } else if self.probe.timeout_ms > 10_000 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "probe.timeout_ms={} will stall status polling",
                    self.probe.timeout_ms
                ),
            });
        }

        for (key, dir) in [
            ("agent_os", &self.paths.agent_os),
            ("app", &self.paths.app),
            ("design", &self.paths.design),
            ("product_plan", &self.paths.product_plan),
        ] {
            if dir.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("paths.{key} is empty"),
                });
            }
        }

        warnings
    }

    /// Fail on any `Error`-level warning. Used at startup.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors: Vec<String> = self
            .validate()
            .into_iter()
            .filter(|w| w.level == WarnLevel::Error)
            .map(|w| w.message)
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AgentOsError::InvalidConfig(errors.join("; ")))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
