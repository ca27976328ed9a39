// TOML configuration, loaded once at startup. Every key is optional and
// falls back to the defaults mirrored in `config.example.toml`.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Flip the x axis so on-screen motion matches a mirror view of the
    /// hand (the natural feel when facing a webcam).
    pub mirror: bool,
    pub camera: CameraConfig,
    pub canvas: CanvasConfig,
    pub gesture: GestureConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mirror: true,
            camera: CameraConfig::default(),
            canvas: CanvasConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub index: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    /// Pen color as [r, g, b].
    pub pen_color: [u8; 3],
    pub pen_thickness: u32,
    pub eraser_thickness: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            pen_color: [0, 0, 0],
            pen_thickness: 5,
            eraser_thickness: 20,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Wrist-y multiplier the index tip must sink below for Writing.
    pub writing_mul: f32,
    /// Wrist-y multiplier all four tips must rise above for Erasing.
    pub erasing_mul: f32,
    /// How far (normalized x) the thumb must swing out from the wrist.
    pub thumb_margin: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            writing_mul: 1.1,
            erasing_mul: 0.9,
            thumb_margin: 0.2,
        }
    }
}

impl Config {
    pub fn load<A: AsRef<Path>>(path: A) -> Result<Self, Error> {
        Self::load_impl(path.as_ref())
    }

    fn load_impl(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::Config(format!(
                "canvas dimensions must be non-zero (got {}x{})",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.canvas.pen_thickness == 0 || self.canvas.eraser_thickness == 0 {
            return Err(Error::Config(
                "pen and eraser thickness must be at least 1".into(),
            ));
        }
        if self.gesture.writing_mul <= 0.0 || self.gesture.erasing_mul <= 0.0 {
            return Err(Error::Config(
                "gesture threshold multipliers must be positive".into(),
            ));
        }
        // The writing line must sit below the erasing line, or the two
        // gestures stop being mutually exclusive.
        if self.gesture.writing_mul <= self.gesture.erasing_mul {
            return Err(Error::Config(format!(
                "writing_mul ({}) must be greater than erasing_mul ({})",
                self.gesture.writing_mul, self.gesture.erasing_mul
            )));
        }
        if self.gesture.thumb_margin < 0.0 {
            return Err(Error::Config(
                "thumb_margin must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_example_config() {
        Config::load("config.example.toml").unwrap();
    }

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn rejects_inverted_threshold_multipliers() {
        let mut config = Config::default();
        config.gesture.writing_mul = 0.8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_thickness() {
        let mut config = Config::default();
        config.canvas.pen_thickness = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("pen_colour = [0, 0, 0]").is_err());
    }
}
