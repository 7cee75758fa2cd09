// src/config/consts.rs

// Net config
pub const LOCAL_API_PORT: u16 = 5000;
pub const API_PREFIX: &str = "/api";
pub const DEFAULT_HOST: &str = "localhost";
pub const USER_AGENT: &str = "amasift_compare/0.4";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Comparison
pub const MAX_COMPARE: usize = 4;
pub const MIN_COMPARE: usize = 2;

// Listing limits
pub const DEALS_LIMIT: u32 = 20;
pub const HISTORY_LIMIT: u32 = 10;
pub const REVIEWS_LIMIT: u32 = 10;

// Placeholder shown when a product has no image
pub const PLACEHOLDER_IMAGE: &str = "images/product-placeholder.png";
