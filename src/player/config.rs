use serde::Deserialize;

/// Element id of the optional JSON config block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "rustyreel-config";

/// Player tuning read from the host page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: f64,
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u32,
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
}

fn default_skip_seconds() -> f64 {
    10.0
}

fn default_hide_delay_ms() -> u32 {
    3000
}

fn default_initial_volume() -> f64 {
    1.0
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            skip_seconds: default_skip_seconds(),
            hide_delay_ms: default_hide_delay_ms(),
            initial_volume: default_initial_volume(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::normalized)
    }

    /// Pull out-of-range values back to something usable.
    pub fn normalized(mut self) -> Self {
        if !self.skip_seconds.is_finite() || self.skip_seconds <= 0.0 {
            self.skip_seconds = default_skip_seconds();
        }
        if self.hide_delay_ms == 0 {
            self.hide_delay_ms = default_hide_delay_ms();
        }
        self.initial_volume = normalize_volume(self.initial_volume);
        self
    }
}

/// Accepts both `0.0..=1.0` and percentage style values.
fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return default_initial_volume();
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PlayerConfig::from_json("{}").unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.skip_seconds, 10.0);
        assert_eq!(config.hide_delay_ms, 3000);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = PlayerConfig::from_json(r#"{"hide_delay_ms": 1500}"#).unwrap();
        assert_eq!(config.hide_delay_ms, 1500);
        assert_eq!(config.skip_seconds, 10.0);
    }

    #[test]
    fn percentage_volume_is_normalized() {
        let config = PlayerConfig::from_json(r#"{"initial_volume": 80}"#).unwrap();
        assert!((config.initial_volume - 0.8).abs() < 1e-9);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config =
            PlayerConfig::from_json(r#"{"skip_seconds": -5, "hide_delay_ms": 0}"#).unwrap();
        assert_eq!(config.skip_seconds, 10.0);
        assert_eq!(config.hide_delay_ms, 3000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PlayerConfig::from_json("{skip").is_err());
    }
}
