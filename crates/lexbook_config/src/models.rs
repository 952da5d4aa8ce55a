// --- File: crates/lexbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// --- Attorney Directory Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DirectoryConfig {
    /// JSON roster file. The built-in roster is used when unset.
    pub path: Option<String>,
}

// --- Consultation terms shown in the booking summary ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConsultationConfig {
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    /// Fee in the smallest currency unit (e.g., cents).
    #[serde(default = "default_fee_cents")]
    pub fee_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ConsultationConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration_minutes(),
            fee_cents: default_fee_cents(),
            currency: default_currency(),
        }
    }
}

// --- Booking Session Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// Slots shown per day in the week grid before "+N more".
    #[serde(default = "default_visible_slots")]
    pub visible_slots_per_day: usize,
    /// Simulated "booking in progress" delay.
    #[serde(default = "default_confirmation_delay_ms")]
    pub confirmation_delay_ms: u64,
    /// Start a session with today's date already selected.
    #[serde(default = "default_true")]
    pub select_today_on_start: bool,
    #[serde(default)]
    pub consultation: ConsultationConfig,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            visible_slots_per_day: default_visible_slots(),
            confirmation_delay_ms: default_confirmation_delay_ms(),
            select_today_on_start: true,
            consultation: ConsultationConfig::default(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_duration_minutes() -> u32 {
    30
}

fn default_fee_cents() -> i64 {
    15_000
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_visible_slots() -> usize {
    3
}

fn default_confirmation_delay_ms() -> u64 {
    1_500
}

fn default_true() -> bool {
    true
}
