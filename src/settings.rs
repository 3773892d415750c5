use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Forecast API root (e.g., "https://api.openweathermap.org/data/2.5")
    pub api_base: String,

    /// OpenWeatherMap API key
    pub api_key: String,

    /// City query in "Name,cc" form (e.g., "Munich,de")
    pub city: String,

    /// Number of 3-hour samples to request (40 = 5 days x 8 samples/day)
    pub sample_count: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: "4f8a1c27e95b3d60c2f7a9e8d1b0c3a5".to_string(),
            city: "Munich,de".to_string(),
            sample_count: 40,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides.
    /// The deployed page can swap the API key or city without a rebuild.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base)) = storage.get_item("skycast_api_base") {
                    settings.api_base = api_base;
                }

                if let Ok(Some(api_key)) = storage.get_item("skycast_api_key") {
                    settings.api_key = api_key;
                }

                if let Ok(Some(city)) = storage.get_item("skycast_city") {
                    settings.city = city;
                }

                if let Ok(Some(log_level)) = storage.get_item("skycast_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
