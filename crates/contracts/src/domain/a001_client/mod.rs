pub mod aggregate;
pub mod filter;

pub use aggregate::{
    AutoGenerateRequest, Client, ClientDto, ClientForm, ClientProfileDraft, ClientSummary,
    ToneOfVoice,
};
pub use filter::filter_clients;
