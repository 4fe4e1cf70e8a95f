//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "rbi-console";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8001;

/// Backend the console talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:18083";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// File opened by a freshly launched container unless the caller picks one.
pub const DEFAULT_LAUNCH_FILE_URL: &str = "https://pub-a0628cecf1764cf3936ade50c81a9a8e.r2.dev/5.%E4%BA%91%E6%A1%8C%E9%9D%A2%E7%B3%BB%E7%BB%9F%E4%BD%BF%E7%94%A8%E6%89%8B%E5%86%8C.docx";

/// Simulated latency of the mock menu endpoint.
pub const DEFAULT_MOCK_DELAY_MS: u64 = 1000;
