//! GodotLogger implementation
//!
//! Bridges simulation logging to Godot's godot_print!/godot_warn!/godot_error! + logs/game.log file.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use fantasy_simulation::{LogLevel, LogPrinter};

/// Путь относительно godot/ директории (Godot запускается оттуда)
const LOG_FILE_PATH: &str = "../logs/game.log";

/// Ошибку открытия файла логируем только один раз
static FILE_ERROR_LOGGED: AtomicBool = AtomicBool::new(false);

pub struct GodotLogger;

impl LogPrinter for GodotLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => godot::prelude::godot_error!("[{}] {}", level.as_str(), message),
            LogLevel::Warning => godot::prelude::godot_warn!("[{}] {}", level.as_str(), message),
            LogLevel::Debug | LogLevel::Info => {
                godot::prelude::godot_print!("[{}] {}", level.as_str(), message)
            }
        }

        Self::append_to_file(level, message);
    }
}

impl GodotLogger {
    fn append_to_file(level: LogLevel, message: &str) {
        let log_path = std::path::Path::new(LOG_FILE_PATH);

        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
        {
            Ok(mut file) => {
                let _ = writeln!(file, "[{}] {}", level.as_str(), message);
            }
            Err(e) => {
                if !FILE_ERROR_LOGGED.swap(true, Ordering::Relaxed) {
                    godot::prelude::godot_error!("Failed to open log file {:?}: {}", log_path, e);
                }
            }
        }
    }
}
