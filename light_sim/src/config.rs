//! Simulation configuration
//!
//! Compiled-in constants with a validation pass so degenerate values are
//! rejected before a window exists, instead of turning into an infinite or
//! zero-length march.

use crate::physics::Circle;
use glam::DVec2;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ray count must be at least 1")]
    NoRays,
    #[error("step size must be positive and finite, got {0}")]
    BadStepSize(f64),
    #[error("canvas dimensions must be non-zero, got {0}x{1}")]
    EmptyCanvas(u32, u32),
    #[error("{name} radius must be positive and finite, got {radius}")]
    BadRadius { name: &'static str, radius: f64 },
}

/// Simulation parameters. Defaults reproduce the reference scene: a 900x600
/// canvas, 100 rays, two obstacles, 10 ms frame delay.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub ray_count: usize,
    pub step_size: f64,
    pub frame_delay: Duration,
    pub light: Circle,
    pub obstacles: Vec<Circle>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            ray_count: 100,
            step_size: 1.0,
            frame_delay: Duration::from_millis(10),
            light: Circle::new(DVec2::new(200.0, 150.0), 80.0),
            obstacles: vec![
                Circle::new(DVec2::new(700.0, 400.0), 100.0),
                Circle::new(DVec2::new(100.0, 100.0), 50.0),
            ],
        }
    }
}

impl SimConfig {
    /// Reject degenerate parameters with a descriptive error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas(self.width, self.height));
        }
        if self.ray_count == 0 {
            return Err(ConfigError::NoRays);
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::BadStepSize(self.step_size));
        }
        Self::check_radius("light source", &self.light)?;
        for obstacle in &self.obstacles {
            Self::check_radius("obstacle", obstacle)?;
        }
        Ok(())
    }

    fn check_radius(name: &'static str, circle: &Circle) -> Result<(), ConfigError> {
        if !circle.radius.is_finite() || circle.radius <= 0.0 {
            return Err(ConfigError::BadRadius {
                name,
                radius: circle.radius,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_ray_count_is_rejected() {
        let config = SimConfig {
            ray_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoRays)));
    }

    #[test]
    fn non_positive_step_size_is_rejected() {
        for step_size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SimConfig {
                step_size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::BadStepSize(_))
            ));
        }
    }

    #[test]
    fn degenerate_radius_is_rejected() {
        let mut config = SimConfig::default();
        config.obstacles.push(Circle::new(DVec2::ZERO, -3.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadRadius {
                name: "obstacle",
                ..
            })
        ));

        let config = SimConfig {
            light: Circle::new(DVec2::ZERO, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadRadius {
                name: "light source",
                ..
            })
        ));
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let config = SimConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCanvas(0, 600))
        ));
    }
}
