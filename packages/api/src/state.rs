use std::sync::Arc;

use store::{CredentialStore, FileStore, MemoryStore, ResponseStore, StoreError, SurveyStore};

use crate::filters::AllowList;
use crate::settings::Settings;

/// Shared handler state: the three stores and the gate's allow-list.
#[derive(Clone, Debug)]
pub struct AppState {
    pub accounts: CredentialStore,
    pub surveys: SurveyStore,
    pub responses: ResponseStore,
    pub allow_list: Arc<AllowList>,
}

impl AppState {
    /// Flat-file stores laid out as configured, creating the directories.
    pub async fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        let users = FileStore::new(&settings.storage.users_dir, "dat");
        let forms = FileStore::new(&settings.storage.forms_dir, "html");
        let responses = FileStore::new(&settings.storage.responses_dir, "dat");
        for store in [&users, &forms, &responses] {
            store.ensure_dir().await?;
        }

        Ok(Self {
            accounts: CredentialStore::new(Arc::new(users)),
            surveys: SurveyStore::new(Arc::new(forms)),
            responses: ResponseStore::new(Arc::new(responses)),
            allow_list: Arc::new(AllowList::new(settings.gate.allowed_origins.clone())),
        })
    }

    /// Memory-backed stores, returned alongside so callers can inspect what was written.
    pub fn in_memory(allow_list: AllowList) -> (Self, InMemoryBackends) {
        let backends = InMemoryBackends::default();
        let state = Self {
            accounts: CredentialStore::new(Arc::new(backends.users.clone())),
            surveys: SurveyStore::new(Arc::new(backends.forms.clone())),
            responses: ResponseStore::new(Arc::new(backends.responses.clone())),
            allow_list: Arc::new(allow_list),
        };
        (state, backends)
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryBackends {
    pub users: MemoryStore,
    pub forms: MemoryStore,
    pub responses: MemoryStore,
}
