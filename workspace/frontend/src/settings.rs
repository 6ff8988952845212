use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Application settings, built once at startup and handed to the components
/// through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Prediction backend base URL, including the API prefix
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Firestore project that stores contact messages
    pub firestore_project: String,

    /// Web API key of the Firestore project
    pub firestore_api_key: String,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            firestore_project: "indian-house01".to_string(),
            firestore_api_key: String::new(),
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from the page environment.
    ///
    /// Precedence: `localStorage` keys, then a `window.API_BASE_URL` set by
    /// the hosting page, then defaults.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = is_local_host(&hostname);

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str("API_BASE_URL")) {
            if let Some(base_url) = value.as_string().filter(|v| !v.is_empty()) {
                settings.api_base_url = base_url;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(base_url)) = storage.get_item("homeprice_api_base_url") {
                settings.api_base_url = base_url;
            }

            if let Ok(Some(log_level)) = storage.get_item("homeprice_log_level") {
                settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
            }

            if let Ok(Some(project)) = storage.get_item("homeprice_firestore_project") {
                settings.firestore_project = project;
            }

            if let Ok(Some(api_key)) = storage.get_item("homeprice_firestore_api_key") {
                settings.firestore_api_key = api_key;
            }

            if let Ok(Some(duration)) = storage.get_item("homeprice_toast_duration_ms") {
                if let Ok(duration_val) = duration.parse::<u32>() {
                    settings.toast_duration_ms = duration_val;
                }
            }
        }

        settings.api_base_url = settings.api_base_url.trim_end_matches('/').to_string();
        settings
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}
