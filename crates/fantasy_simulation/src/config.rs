//! MovementConfig: тюнинг движения игрока (walking speed, fall acceleration)
//!
//! - Godot: значения приходят из exported properties ноды
//! - Headless: из .ron файла (`load_movement_config`)

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Скорость ходьбы по умолчанию (m/s)
pub const DEFAULT_WALKING_SPEED: f32 = 14.0;

/// Ускорение падения по умолчанию (m/s²)
pub const DEFAULT_FALL_ACCELERATION: f32 = 75.0;

/// Параметры движения персонажа
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Горизонтальная скорость (m/s)
    pub walking_speed: f32,
    /// Ускорение вниз в воздухе (m/s²)
    pub fall_acceleration: f32,
    /// Обнулять vertical velocity на земле.
    ///
    /// По умолчанию `false`: накопленная скорость падения сохраняется после
    /// приземления (хост может сам гасить её floor snap'ом).
    pub reset_vertical_on_floor: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walking_speed: DEFAULT_WALKING_SPEED,
            fall_acceleration: DEFAULT_FALL_ACCELERATION,
            reset_vertical_on_floor: false,
        }
    }
}

impl MovementConfig {
    /// Проверка значений (NaN/inf/отрицательные)
    pub fn validate(&self) -> Result<(), String> {
        if !self.walking_speed.is_finite() || self.walking_speed < 0.0 {
            return Err(format!(
                "walking_speed must be finite and >= 0, got {}",
                self.walking_speed
            ));
        }
        if !self.fall_acceleration.is_finite() || self.fall_acceleration < 0.0 {
            return Err(format!(
                "fall_acceleration must be finite and >= 0, got {}",
                self.fall_acceleration
            ));
        }
        Ok(())
    }

    /// Версия с зажатыми значениями (для editor-значений, которые нельзя отвергнуть)
    pub fn sanitized(self) -> Self {
        let clamp = |value: f32, fallback: f32| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                fallback
            }
        };

        Self {
            walking_speed: clamp(self.walking_speed, DEFAULT_WALKING_SPEED),
            fall_acceleration: clamp(self.fall_acceleration, DEFAULT_FALL_ACCELERATION),
            reset_vertical_on_floor: self.reset_vertical_on_floor,
        }
    }
}

/// Ошибка загрузки конфига
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Парсинг + валидация конфига из RON строки
///
/// `source` — имя для сообщений об ошибке (путь файла или "<inline>")
pub fn parse_movement_config(source: &str, contents: &str) -> Result<MovementConfig, ConfigLoadError> {
    let config: MovementConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    config.validate().map_err(|message| ConfigLoadError {
        file: source.to_string(),
        message,
    })?;

    Ok(config)
}

/// Загрузка MovementConfig из .ron файла
pub fn load_movement_config(path: &Path) -> Result<MovementConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_config(&file_name, &contents)
}
