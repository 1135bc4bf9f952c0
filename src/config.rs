//! Tuning for the particle field.
//!
//! Every field is optional in JSON; omitted values take the defaults the
//! portfolio page ships with (100 white particles, lines under 100px).

use crate::error::BackdropError;
use serde::Deserialize;

/// Particle field parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles, fixed for the field's lifetime.
    pub count: usize,
    /// Pairs strictly closer than this are connected.
    pub proximity: f64,
    /// Line alpha for two coincident particles; decays linearly to 0 at
    /// `proximity`.
    pub line_alpha: f64,
    pub line_width: f64,
    /// Maximum speed per axis, in pixels per frame.
    pub speed: f64,
    /// Half-open `[min, max)` radius range.
    pub radius: (f64, f64),
    /// Half-open `[min, max)` opacity range.
    pub opacity: (f64, f64),
    pub particle_color: [u8; 3],
    pub line_color: [u8; 3],
    /// Fixed PRNG seed. `None` seeds from the host's random source.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            proximity: 100.0,
            line_alpha: 0.2,
            line_width: 1.0,
            speed: 1.0,
            radius: (1.0, 4.0),
            opacity: (0.2, 0.7),
            particle_color: [255, 255, 255],
            line_color: [255, 255, 255],
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BackdropError> {
        let scalars = [
            ("proximity", self.proximity),
            ("line_alpha", self.line_alpha),
            ("line_width", self.line_width),
            ("speed", self.speed),
            ("radius.min", self.radius.0),
            ("radius.max", self.radius.1),
            ("opacity.min", self.opacity.0),
            ("opacity.max", self.opacity.1),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BackdropError::InvalidConfig(format!("{name} must be finite")));
        }
        if self.proximity <= 0.0 {
            return Err(BackdropError::InvalidConfig(
                "proximity must be positive".into(),
            ));
        }
        if self.line_width <= 0.0 {
            return Err(BackdropError::InvalidConfig(
                "line_width must be positive".into(),
            ));
        }
        if self.speed < 0.0 {
            return Err(BackdropError::InvalidConfig(
                "speed must not be negative".into(),
            ));
        }
        for (name, (min, max)) in [("radius", self.radius), ("opacity", self.opacity)] {
            if min > max {
                return Err(BackdropError::InvalidConfig(format!(
                    "{name} range is inverted: [{min}, {max})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
        assert_eq!(config.count, 100);
        assert_eq!(config.proximity, 100.0);
        assert_eq!(config.line_alpha, 0.2);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = FieldConfig::from_json(r#"{"count": 40, "seed": 7}"#).unwrap();
        assert_eq!(config.count, 40);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.radius, (1.0, 4.0));
    }

    #[test]
    fn ranges_parse_from_arrays() {
        let config = FieldConfig::from_json(r#"{"opacity": [0.1, 0.3]}"#).unwrap();
        assert_eq!(config.opacity, (0.1, 0.3));
    }

    #[test]
    fn zero_proximity_is_rejected() {
        let err = FieldConfig::from_json(r#"{"proximity": 0}"#).unwrap_err();
        assert!(
            matches!(err, BackdropError::InvalidConfig(ref m) if m.contains("proximity")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = FieldConfig::from_json(r#"{"radius": [4, 1]}"#).unwrap_err();
        assert!(matches!(err, BackdropError::InvalidConfig(ref m) if m.contains("radius")));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let config = FieldConfig {
            speed: -1.0,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = FieldConfig::from_json(r#"{"count": "many"}"#).unwrap_err();
        assert!(matches!(err, BackdropError::Config(_)));
    }
}
