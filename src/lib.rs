#![doc = include_str!("../README.md")]

pub mod claims;
pub mod config;
pub mod error;
pub mod fragment;
pub mod gate;
pub mod page;
pub mod session;
pub mod store;
pub mod types;
pub mod urls;

// Re-exports for convenient access
pub use claims::{decode_claims, Claims};
pub use config::ProviderConfig;
pub use error::Error;
pub use fragment::{extract_tokens, TokenSet};
pub use gate::Gate;
pub use page::Page;
pub use session::{RedirectOutcome, SessionManager, UserDisplay};
pub use store::{
    MemoryStorage, SessionStore, StorageBackend, ACCESS_TOKEN_KEY, EXPIRES_AT_KEY, ID_TOKEN_KEY,
};
pub use types::ItemId;
pub use urls::{HostedUi, SIGNUP_SCREEN_HINT};
