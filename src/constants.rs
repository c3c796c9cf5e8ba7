// ABOUTME: Central constants for API routes, preference keys, and environment variables
// ABOUTME: Single source of truth for strings shared across gateway, session, and config

/// Remote REST route paths, relative to the configured base URL
pub mod routes {
    /// Login with mobile number and password
    pub const USER_LOGIN: &str = "user/login";
    /// Register a new account
    pub const USER_REGISTER: &str = "user/register";
    /// Fetch or update the authenticated user's profile
    pub const USER_PROFILE: &str = "user/profile";
    /// List products within a category
    pub const PRODUCT_CATEGORY: &str = "product/category";
    /// Fetch the nutrition analysis for a named product
    pub const PRODUCT_ANALYSIS: &str = "product/productAnalysis";
    /// Analyze a product from an uploaded photo
    pub const IMAGE_PRODUCT_ANALYSIS: &str = "product/imageProductAnalysis";
    /// Fetch personalized food recommendations
    pub const PRODUCT_SUGGEST: &str = "product/productSuggest";
}

/// Durable preference keys and file names
pub mod prefs {
    /// Preferences file name inside the data directory
    pub const PREFERENCES_FILE: &str = "preferences.json";
    /// Multipart form part name for image uploads
    pub const IMAGE_PART_NAME: &str = "image";
}

/// Environment variable names for configuration
pub mod env {
    /// Base URL of the FoodLens backend, e.g. `http://localhost:3000/api/v1`
    pub const API_BASE_URL: &str = "FOODLENS_API_BASE_URL";
    /// Sqlite database URL for the local user record store
    pub const DATABASE_URL: &str = "FOODLENS_DATABASE_URL";
    /// Directory for durable client state (preferences, default database)
    pub const DATA_DIR: &str = "FOODLENS_DATA_DIR";
    /// Overall request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FOODLENS_HTTP_TIMEOUT_SECS";
    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "FOODLENS_CONNECT_TIMEOUT_SECS";
    /// Default display language (`English` or `Hindi`)
    pub const LANGUAGE: &str = "FOODLENS_LANGUAGE";
}

/// Default configuration values
pub mod defaults {
    /// Default backend base URL (local development server)
    pub const API_BASE_URL: &str = "http://localhost:3000/api/v1";
    /// Default request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("foodlens-client/", env!("CARGO_PKG_VERSION"));
    /// Local database file name inside the data directory
    pub const DATABASE_FILE: &str = "users.db";
}
