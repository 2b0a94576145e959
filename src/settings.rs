use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphicsQuality {
    Low,
    Medium,
    Ultra,
}

impl GraphicsQuality {
    /// Terrain raster scale relative to the viewport.
    pub fn terrain_resolution(self) -> f32 {
        match self {
            GraphicsQuality::Low => 0.1,
            GraphicsQuality::Medium => 0.25,
            GraphicsQuality::Ultra => 0.5,
        }
    }

    /// Weather streak count per frame.
    pub fn streak_count(self) -> usize {
        match self {
            GraphicsQuality::Low => 30,
            GraphicsQuality::Medium => 60,
            GraphicsQuality::Ultra => 120,
        }
    }
}

impl Default for GraphicsQuality {
    fn default() -> Self {
        GraphicsQuality::Medium
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default = "GameSettings::default_fov")]
    pub fov: f32,
    #[serde(default)]
    pub graphics_quality: GraphicsQuality,
    /// Further scales the terrain raster down by 0.6.
    #[serde(default)]
    pub performance_mode: bool,
    #[serde(default = "GameSettings::default_view_distance")]
    pub view_distance: f32,
    #[serde(default = "GameSettings::default_enabled")]
    pub camera_bob: bool,
    #[serde(default = "GameSettings::default_enabled")]
    pub weather_enabled: bool,
    #[serde(default)]
    pub resolution: Resolution,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            fov: Self::default_fov(),
            graphics_quality: GraphicsQuality::default(),
            performance_mode: false,
            view_distance: Self::default_view_distance(),
            camera_bob: true,
            weather_enabled: true,
            resolution: Resolution::default(),
        }
    }
}

impl GameSettings {
    pub fn load() -> Self {
        Self::load_from_path("settings.json")
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<GameSettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default settings.",
                        path, err
                    );
                    GameSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("Settings file {:?} not found. Using defaults.", path);
                GameSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default settings.",
                    path, err
                );
                GameSettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if !self.fov.is_finite() || self.fov < Self::MIN_FOV || self.fov > Self::MAX_FOV {
            warn!(
                "Field of view {} out of range [{}, {}]. Using {} instead.",
                self.fov,
                Self::MIN_FOV,
                Self::MAX_FOV,
                Self::default_fov()
            );
            self.fov = Self::default_fov();
        }

        if !self.view_distance.is_finite() || self.view_distance < Self::MIN_VIEW_DISTANCE {
            warn!(
                "View distance {} too small. Using {} instead.",
                self.view_distance,
                Self::default_view_distance()
            );
            self.view_distance = Self::default_view_distance();
        }

        if self.resolution.width == 0 || self.resolution.height == 0 {
            warn!("Resolution must be greater than zero. Using default resolution.");
            self.resolution = Resolution::default();
        }

        self
    }

    /// Effective terrain raster scale: quality tier, further reduced under
    /// performance mode.
    pub fn terrain_resolution_factor(&self) -> f32 {
        let base = self.graphics_quality.terrain_resolution();
        if self.performance_mode {
            base * 0.6
        } else {
            base
        }
    }

    const MIN_FOV: f32 = 30.0;
    const MAX_FOV: f32 = 150.0;
    const MIN_VIEW_DISTANCE: f32 = 100.0;

    const fn default_fov() -> f32 {
        90.0
    }

    const fn default_view_distance() -> f32 {
        1500.0
    }

    const fn default_enabled() -> bool {
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
