//! Application configuration, loaded from JSON.

use std::path::Path;

use macroquad::color::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error};
use crate::rendering::Palette;

/// RGBA colors, one byte per channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub grid: [u8; 4],
    pub alive: [u8; 4],
    pub dead: [u8; 4],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            grid: [128, 128, 128, 255],
            alive: [0, 128, 0, 255],
            dead: [255, 255, 255, 255],
        }
    }
}

impl PaletteConfig {
    pub fn to_palette(&self) -> Palette {
        let color = |[r, g, b, a]: [u8; 4]| Color::from_rgba(r, g, b, a);
        Palette {
            grid: color(self.grid),
            alive: color(self.alive),
            dead: color(self.dead),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cell edge in pixels, excluding the grid line
    pub cell_size: u32,
    /// Initial grid width in cells
    pub width: i32,
    /// Initial grid height in cells
    pub height: i32,
    /// Initial speed. Negative slows down, positive runs several generations per frame.
    pub speed: i32,
    pub speed_min: i32,
    pub speed_max: i32,
    /// Largest width or height the controls accept
    pub max_dimension: i32,
    /// Delay per unit of negative speed, in milliseconds
    pub slow_motion_step_ms: u64,
    pub palette: PaletteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_size: 5,
            width: 64,
            height: 64,
            speed: 1,
            speed_min: -20,
            speed_max: 20,
            max_dimension: 512,
            slow_motion_step_ms: 12,
            palette: PaletteConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        if self.max_dimension <= 0 {
            return Err(ConfigError::InvalidMaxDimension(self.max_dimension));
        }
        let canvas_extent = (self.cell_size as u64 + 1) * self.max_dimension as u64 + 1;
        if canvas_extent > u16::MAX as u64 {
            return Err(ConfigError::CanvasTooLarge {
                extent: canvas_extent,
                limit: u16::MAX,
            });
        }
        for dimension in [self.width, self.height] {
            if dimension <= 0 || dimension > self.max_dimension {
                return Err(ConfigError::InvalidDimension {
                    value: dimension,
                    max: self.max_dimension,
                });
            }
        }
        if self.speed_min > self.speed_max {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if !(self.speed_min..=self.speed_max).contains(&self.speed) {
            return Err(ConfigError::SpeedOutOfRange(self.speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "cell_size": 3, "palette": { "alive": [255, 0, 0, 255] } }"#).unwrap();
        assert_eq!(config.cell_size, 3);
        assert_eq!(config.width, 64);
        assert_eq!(config.palette.alive, [255, 0, 0, 255]);
        assert_eq!(config.palette.dead, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let zero_cell = AppConfig { cell_size: 0, ..AppConfig::default() };
        assert!(matches!(zero_cell.validate(), Err(ConfigError::InvalidCellSize)));

        let huge = AppConfig { max_dimension: 20_000, ..AppConfig::default() };
        assert!(matches!(huge.validate(), Err(ConfigError::CanvasTooLarge { .. })));

        let narrow = AppConfig { width: 0, ..AppConfig::default() };
        assert!(matches!(narrow.validate(), Err(ConfigError::InvalidDimension { value: 0, .. })));

        let inverted = AppConfig { speed_min: 5, speed_max: -5, ..AppConfig::default() };
        assert!(matches!(inverted.validate(), Err(ConfigError::InvalidSpeedRange { .. })));

        let fast = AppConfig { speed: 99, ..AppConfig::default() };
        assert!(matches!(fast.validate(), Err(ConfigError::SpeedOutOfRange(99))));
    }

    #[test]
    fn test_palette_conversion() {
        let palette = PaletteConfig::default().to_palette();
        assert_eq!(palette.dead, Color::from_rgba(255, 255, 255, 255));
        assert_eq!(palette.grid, Color::from_rgba(128, 128, 128, 255));
    }
}
