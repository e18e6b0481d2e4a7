//! Image widget settings

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::Vec4;
use crate::ui::widgets::ImageType;

/// Serializable settings shared by image widgets
///
/// ```toml
/// image_type = "Simple"
/// preserve_aspect = true
/// pixel_perfect = false
/// raycast_target = true
/// color = [1.0, 1.0, 1.0, 1.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// How the sprite is laid out inside the frame
    pub image_type: ImageType,
    /// Scale uniformly instead of stretching to the frame
    pub preserve_aspect: bool,
    /// Snap the frame to whole canvas pixels before sizing the mesh
    pub pixel_perfect: bool,
    /// Whether the image takes part in raycasts at all
    pub raycast_target: bool,
    /// Fill color (RGBA)
    pub color: Vec4,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            image_type: ImageType::Simple,
            preserve_aspect: false,
            pixel_perfect: false,
            raycast_target: true,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

impl Config for ImageConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_parse_toml_with_defaults() {
        let config = ImageConfig::from_str_with_format(
            "preserve_aspect = true\ncolor = [1.0, 0.0, 0.0, 0.5]\n",
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.image_type, ImageType::Simple);
        assert!(config.preserve_aspect);
        assert!(config.raycast_target);
        assert_eq!(config.color, Vec4::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_parse_ron() {
        let config = ImageConfig::from_str_with_format(
            "(image_type: Sliced, pixel_perfect: true)",
            ConfigFormat::Ron,
        )
        .unwrap();

        assert_eq!(config.image_type, ImageType::Sliced);
        assert!(config.pixel_perfect);
        assert!(!config.preserve_aspect);
    }

    #[test]
    fn test_toml_text_survives_reparse() {
        let config = ImageConfig {
            image_type: ImageType::Filled,
            preserve_aspect: true,
            ..ImageConfig::default()
        };

        let text = config.to_string_with_format(ConfigFormat::Toml).unwrap();
        let parsed = ImageConfig::from_str_with_format(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_image_type_is_parse_error() {
        let result = ImageConfig::from_str_with_format("image_type = \"Radial\"", ConfigFormat::Toml);
        assert!(matches!(result, Err(crate::config::ConfigError::Parse(_))));
    }
}
