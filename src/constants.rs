/// Technology Detection API endpoint
pub const API_URL: &str =
    "https://technology-detection-api.p.rapidapi.com/api/v1/technology-detection/detect";
pub const API_HOST: &str = "technology-detection-api.p.rapidapi.com";

/// RapidAPI authentication headers
pub const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";
pub const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

/// Credential sources
pub const RAPIDAPI_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const ENV_FILE_NAME: &str = ".env";

/// Where to obtain a key, shown in help and error output
pub const SIGNUP_URL: &str =
    "https://rapidapi.com/dapdev-dapdev-default/api/technology-detection-api";

/// Request limits
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const BODY_EXCERPT_LIMIT: usize = 200;
