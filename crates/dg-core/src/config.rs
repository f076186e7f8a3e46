//! Generator configuration

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Axis, ConfigError};

/// Tuning parameters for one `generate()` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells (odd)
    pub width: usize,
    /// Grid height in cells (odd)
    pub height: usize,
    /// Number of rooms to attempt to place
    pub num_room_tries: usize,
    /// Positions tried per room before it is dropped
    pub tries_per_room: usize,
    /// Widens the range of base room sizes
    pub room_extra_size: u32,
    /// Cells of buffer kept between rooms when testing overlap
    pub room_separation: usize,
    /// Chance (0-100) that a maze corridor turns instead of running straight
    pub winding_percent: u32,
    /// Inverse chance of opening a connector between already-joined regions
    pub extra_connector_chance: u32,
    /// Connectors closer than this to an opened connector are discarded
    pub min_connector_spacing: u32,
    /// Turn stone bordering open space into `Wall` once generation is done
    pub outline_walls: bool,
    /// RNG seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_room_tries: DEFAULT_ROOM_TRIES,
            tries_per_room: DEFAULT_TRIES_PER_ROOM,
            room_extra_size: 0,
            room_separation: 0,
            winding_percent: 0,
            extra_connector_chance: DEFAULT_EXTRA_CONNECTOR_CHANCE,
            min_connector_spacing: DEFAULT_CONNECTOR_SPACING,
            outline_walls: false,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    /// Create a default configuration for a grid of the given size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check every parameter, returning the first violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension(Axis::Width, self.width)?;
        check_dimension(Axis::Height, self.height)?;
        if self.room_extra_size > MAX_ROOM_EXTRA_SIZE {
            return Err(ConfigError::RoomExtraSizeTooLarge {
                value: self.room_extra_size,
                max: MAX_ROOM_EXTRA_SIZE,
            });
        }
        if self.winding_percent > MAX_WINDING_PERCENT {
            return Err(ConfigError::WindingPercentOutOfRange(self.winding_percent));
        }
        if self.extra_connector_chance == 0 {
            return Err(ConfigError::ZeroExtraConnectorChance);
        }
        if self.min_connector_spacing == 0 {
            return Err(ConfigError::ZeroConnectorSpacing);
        }
        Ok(())
    }
}

/// Grid extents must be odd and at least [`MIN_DIMENSION`].
pub(crate) fn check_dimension(axis: Axis, value: usize) -> Result<(), ConfigError> {
    if value < MIN_DIMENSION {
        return Err(ConfigError::DimensionTooSmall {
            axis,
            value,
            min: MIN_DIMENSION,
        });
    }
    if value % 2 == 0 {
        return Err(ConfigError::EvenDimension { axis, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_even_dimensions_rejected() {
        let config = GeneratorConfig::with_size(50, 51);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EvenDimension {
                axis: Axis::Width,
                value: 50
            })
        );

        let config = GeneratorConfig::with_size(51, 40);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EvenDimension {
                axis: Axis::Height,
                value: 40
            })
        );
    }

    #[test]
    fn test_tiny_dimensions_rejected() {
        let config = GeneratorConfig::with_size(1, 9);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionTooSmall { axis: Axis::Width, value: 1, .. })
        ));
        assert_eq!(GeneratorConfig::with_size(3, 3).validate(), Ok(()));
    }

    #[test]
    fn test_tuning_ranges() {
        let mut config = GeneratorConfig::default();
        config.winding_percent = 101;
        assert_eq!(
            config.validate(),
            Err(ConfigError::WindingPercentOutOfRange(101))
        );

        config.winding_percent = 100;
        config.extra_connector_chance = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroExtraConnectorChance));

        config.extra_connector_chance = 1;
        config.min_connector_spacing = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroConnectorSpacing));
    }

    #[test]
    fn test_room_extra_size_is_capped() {
        let mut config = GeneratorConfig::default();
        config.room_extra_size = MAX_ROOM_EXTRA_SIZE;
        assert_eq!(config.validate(), Ok(()));

        config.room_extra_size = u32::MAX;
        assert_eq!(
            config.validate(),
            Err(ConfigError::RoomExtraSizeTooLarge {
                value: u32::MAX,
                max: MAX_ROOM_EXTRA_SIZE
            })
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "width": 31, "winding_percent": 40 }"#).unwrap();
        assert_eq!(config.width, 31);
        assert_eq!(config.winding_percent, 40);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.extra_connector_chance, DEFAULT_EXTRA_CONNECTOR_CHANCE);
    }
}
