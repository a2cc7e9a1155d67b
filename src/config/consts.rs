// src/config/consts.rs

// Upstream (DHV-XC)
pub const BASE_URL: &str = "https://de.dhv-xc.de";
pub const AUTH_PATH: &str = "/api/v1/authcheck";
pub const USER_PATH: &str = "/api/v1/user";
pub const FLIGHTS_PATH: &str = "/flights/my";
pub const SESSION_COOKIE: &str = "DHV_XC_SESSION";
pub const USER_AGENT: &str = "Paragliding-Dashboard/1.0";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Environment overrides (also read from .env)
pub const ENV_BASE_URL: &str = "XC_DASH_BASE_URL";
pub const ENV_USER: &str = "XC_DASH_USER";
pub const ENV_PASSWORD: &str = "XC_DASH_PASSWORD";

// Statistics
pub const RECENT_FLIGHTS: usize = 5;
pub const MONTH_LABEL_FORMAT: &str = "%b %Y"; // "Mar 2024"

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info,xc_dash=debug";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "flights";
