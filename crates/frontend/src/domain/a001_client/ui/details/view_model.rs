//! Client Details - ViewModel
//!
//! Holds the loaded client, the keyword collection and the edit/delete state.

use contracts::domain::a001_client::aggregate::{Client, ClientForm};
use contracts::domain::a002_keyword::collection::KeywordCollection;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_client::model;
use crate::shared::http::HttpBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    NotFound,
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct ClientDetailsVm {
    pub backend: StoredValue<HttpBackend>,
    pub client_id: StoredValue<String>,

    pub load_state: RwSignal<LoadState>,
    pub client: RwSignal<Option<Client>>,
    pub keywords: RwSignal<KeywordCollection>,

    // Edit mode: a staged copy of the profile
    pub editing: RwSignal<bool>,
    pub form: RwSignal<ClientForm>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    // Two-step delete
    pub confirm_delete: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
    pub deleted: RwSignal<bool>,
}

impl ClientDetailsVm {
    pub fn new(backend: HttpBackend, client_id: String) -> Self {
        Self {
            backend: StoredValue::new(backend),
            client_id: StoredValue::new(client_id),
            load_state: RwSignal::new(LoadState::Loading),
            client: RwSignal::new(None),
            keywords: RwSignal::new(KeywordCollection::default()),
            editing: RwSignal::new(false),
            form: RwSignal::new(ClientForm::default()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            confirm_delete: RwSignal::new(false),
            deleting: RwSignal::new(false),
            deleted: RwSignal::new(false),
        }
    }

    /// Fetch the client; keywords are replaced with the server copy.
    pub fn load(&self) {
        let vm = *self;
        let backend = self.backend.get_value();
        let id = self.client_id.get_value();
        spawn_local(async move {
            match model::load_client(&backend, &id).await {
                Ok(client) => vm.set_client(client),
                Err(ApiError::NotFound) => vm.load_state.set(LoadState::NotFound),
                Err(e) => vm.load_state.set(LoadState::Failed(e.to_string())),
            }
        });
    }

    fn set_client(&self, client: Client) {
        self.keywords
            .update(|k| k.replace_all(client.keyword_history.clone()));
        self.client.set(Some(client));
        // Reloads after keyword changes must not rebuild the page.
        if self.load_state.get_untracked() != LoadState::Loaded {
            self.load_state.set(LoadState::Loaded);
        }
    }

    pub fn start_edit(&self) {
        if let Some(client) = self.client.get_untracked() {
            self.form.set(ClientForm::from(&client));
            self.error.set(None);
            self.editing.set(true);
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(false);
        self.error.set(None);
    }

    pub fn save(&self) {
        let Some(current) = self.client.get_untracked() else {
            return;
        };
        let vm = *self;
        let form = self.form.get_untracked();
        let backend = self.backend.get_value();
        self.error.set(None);
        self.saving.set(true);
        spawn_local(async move {
            match model::save_client(&backend, &current, &form).await {
                Ok(updated) => {
                    vm.client.set(Some(updated));
                    vm.editing.set(false);
                }
                Err(e) => vm.error.set(Some(e.to_string())),
            }
            vm.saving.set(false);
        });
    }

    /// First click arms the delete button, the second one deletes.
    pub fn delete(&self) {
        if !self.confirm_delete.get_untracked() {
            self.confirm_delete.set(true);
            return;
        }
        let vm = *self;
        let backend = self.backend.get_value();
        let id = self.client_id.get_value();
        self.error.set(None);
        self.deleting.set(true);
        spawn_local(async move {
            match model::delete_client(&backend, &id).await {
                Ok(()) => vm.deleted.set(true),
                Err(e) => {
                    vm.error.set(Some(e.to_string()));
                    vm.confirm_delete.set(false);
                }
            }
            vm.deleting.set(false);
        });
    }

    pub fn disarm_delete(&self) {
        self.confirm_delete.set(false);
    }
}
