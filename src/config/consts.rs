// src/config/consts.rs

// Dataset
pub const DEFAULT_DATASET_PATH: &str = "data/phones.csv";

// Local store (logs)
pub const LOG_FILE: &str = ".store/debug.log";

// Image lookup
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/200x200/000000/FFFFFF/png?text=No+Image";
pub const IMAGE_SEARCH_BASE: &str = "https://duckduckgo.com";
pub const IMAGE_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("phone_advisor/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "results";

// Display
pub const CARDS_PER_ROW: usize = 4;
pub const CARD_IMAGE_WIDTH: f32 = 200.0;
pub const QUERY_HINT: &str = "Type your query like 'phone under ₹14000 with 16GB RAM'";

// Environment overrides
pub const ENV_DATASET: &str = "PHONE_ADVISOR_DATA";
pub const ENV_OFFLINE: &str = "PHONE_ADVISOR_OFFLINE";
pub const ENV_IMAGE_TIMEOUT: &str = "PHONE_ADVISOR_IMAGE_TIMEOUT_SECS";
