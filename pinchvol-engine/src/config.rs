use anyhow::{Result, bail};
use pinchvol_messages::ControlConfig;

/// Reject configurations the engine cannot run with.
///
/// Must pass before the frame loop starts.
pub fn validate_config(config: &ControlConfig) -> Result<()> {
    let thresholds = [
        ("closed_max", config.closed_max),
        ("pinch_open_boundary", config.pinch_open_boundary),
        ("low_anchor", config.low_anchor),
        ("high_anchor", config.high_anchor),
    ];
    for (name, value) in thresholds {
        if !value.is_finite() {
            bail!("{name} must be a finite distance, got {value}");
        }
    }

    if config.high_anchor <= config.low_anchor {
        bail!(
            "high_anchor ({}) must be greater than low_anchor ({})",
            config.high_anchor,
            config.low_anchor
        );
    }
    if config.closed_max > config.pinch_open_boundary {
        bail!(
            "closed_max ({}) must not exceed pinch_open_boundary ({})",
            config.closed_max,
            config.pinch_open_boundary
        );
    }
    if config.history_capacity == 0 {
        bail!("history_capacity must be at least 1");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ControlConfig::default()).is_ok());
        assert!(validate_config(&ControlConfig::recognition_profile()).is_ok());
    }

    #[test]
    fn rejects_inverted_anchors() {
        let config = ControlConfig {
            low_anchor: 200.0,
            high_anchor: 200.0,
            ..ControlConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("high_anchor"));
    }

    #[test]
    fn rejects_empty_history() {
        let config = ControlConfig {
            history_capacity: 0,
            ..ControlConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_non_finite_thresholds() {
        let config = ControlConfig {
            closed_max: f32::NAN,
            ..ControlConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_overlapping_gesture_bands() {
        let config = ControlConfig {
            closed_max: 90.0,
            ..ControlConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
