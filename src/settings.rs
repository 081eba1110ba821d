use std::path::Path;

use config_file::FromConfigFile;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Target frame rate for the animation loop.
    pub fps: u32,
    /// Brightness percentage (0-100), applied to ring and eyes alike.
    pub brightness: u8,
    /// Mode identifiers to activate right after startup.
    pub ring_mode: Option<String>,
    pub eye_mode: Option<String>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            fps: 24,
            brightness: 70,
            ring_mode: None,
            eye_mode: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, String> {
        Settings::from_config_file(path).map_err(|err| format!("{:?}", err))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.fps == 0 {
            return Err("fps must be at least 1".to_string());
        }
        if self.brightness > 100 {
            return Err(format!(
                "brightness is a percentage, got {}",
                self.brightness
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_device() {
        let settings = Settings::default();
        assert_eq!(settings.fps, 24);
        assert_eq!(settings.brightness, 70);
        assert!(settings.ring_mode.is_none());
        assert!(settings.eye_mode.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn loads_a_partial_toml_file() {
        let mut file = tempfile_with_extension("toml");
        writeln!(file.1, "fps = 30\neye_mode = \"eye-blink\"").unwrap();

        let settings = Settings::load(&file.0).unwrap();
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.brightness, 70);
        assert_eq!(settings.eye_mode.as_deref(), Some("eye-blink"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut settings = Settings::default();
        settings.brightness = 101;
        assert!(settings.validate().is_err());
        settings.brightness = 100;
        settings.fps = 0;
        assert!(settings.validate().is_err());
    }

    fn tempfile_with_extension(ext: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(format!(
            "ringlicht-settings-{}-{}.{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            ext
        ));
        let file = std::fs::File::create(&path).unwrap();
        (path, file)
    }
}
