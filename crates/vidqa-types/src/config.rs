use serde::{Deserialize, Serialize};

/// Top-level client configuration, constructed once per page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub query: QueryConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            query: QueryConfig::default(),
            storage: StorageConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Resource path for question/answer exchanges
    pub endpoint: String,
    /// Bounded wait before an unresponsive backend counts as a failure
    pub timeout_ms: u32,
    /// Resource path for library statistics
    pub stats_endpoint: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: "/query".to_string(),
            timeout_ms: 30_000,
            stats_endpoint: "/stats".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    /// Namespace key for the local key-value backend, and the resource
    /// path prefix is fixed for the HTTP backend
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
            namespace: "vidqa:chats".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Best available: localStorage, falling back to memory
    Auto,
    LocalStorage,
    /// Remote store via GET/POST /chats
    Http,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Resource path reporting the current profile
    pub profile_endpoint: String,
    /// Where the browser navigates after a 401
    pub login_path: String,
    /// How long the 401 notification stays visible before redirecting
    pub redirect_delay_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            profile_endpoint: "/api/user".to_string(),
            login_path: "/login".to_string(),
            redirect_delay_ms: 1_500,
        }
    }
}
