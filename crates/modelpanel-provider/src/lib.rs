pub mod credentials;
pub mod registry;
pub mod tuya_openai;

pub use credentials::{initial_values, obfuscate};
pub use registry::{all, check_all, get, selectors};
