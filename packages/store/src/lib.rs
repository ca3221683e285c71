pub mod accounts;
pub mod error;
pub mod kv;
pub mod models;
pub mod surveys;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

pub use accounts::CredentialStore;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use models::{Account, Survey, SurveyResponse};
pub use surveys::{ResponseStore, SurveyStore};
