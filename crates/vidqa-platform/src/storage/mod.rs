pub mod memory;
pub mod local;
pub mod http;
pub mod auto;

pub use memory::MemoryStore;
pub use local::LocalStorageStore;
pub use http::HttpStore;
pub use auto::auto_detect_storage;
