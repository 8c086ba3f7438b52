//! Clients for the external collaborators behind the chat front-ends.

mod hosted;
mod local_model;
mod wordlist;

pub use hosted::HostedChatSession;
pub use local_model::LocalModelClient;
pub use wordlist::WordlistDataset;
