use contracts::domain::a001_client::aggregate::ClientSummary;
use contracts::domain::a001_client::filter_clients;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ClientsListState {
    pub all: Vec<ClientSummary>,
    pub search_query: String,
    pub is_loaded: bool,
}

impl ClientsListState {
    /// Rows matching the current search, in backend order.
    pub fn visible(&self) -> Vec<ClientSummary> {
        filter_clients(&self.all, &self.search_query)
    }
}

pub fn create_state() -> RwSignal<ClientsListState> {
    RwSignal::new(ClientsListState::default())
}
