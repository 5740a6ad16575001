//! Application constants
//!
//! Centralized location for the domain-level constants used by the
//! classifier and the configuration defaults.

// Classification policy
/// Magnitude (in percent) at which an unfavorable change is flagged.
pub const NEGATIVE_CHANGE_THRESHOLD_PERCENT: f64 = 10.0;

// Report text
pub const NORMAL_RANGE_LINE: &str = "No issues detected. Metric is within normal range.";
pub const GLYPH_UP: &str = "↑";
pub const GLYPH_DOWN: &str = "↓";
pub const GLYPH_FLAT: &str = "→";

// Configuration defaults
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_SQL_ENDPOINT: &str = "/api/sql/execute";
pub const DEFAULT_HEALTH_ENDPOINT: &str = "/health";
pub const DEFAULT_BUTTON_TEXT: &str = "Analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RETRY_COUNT: usize = 3;
