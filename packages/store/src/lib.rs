pub mod config;
pub mod dispatch;
pub mod models;
pub mod state;
pub mod token;
pub mod widgets;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use config::ClientConfig;
pub use dispatch::{decode, Dispatch, SearchEnvelope};
pub use models::{
    CurrencyConversion, ErrorResult, Fact, MathResult, ResultType, SearchResult, SummaryUpdate,
    TimerResult, UnitConversion, UniversalResult, Website, Widget,
};
pub use state::{RequestId, SearchUiState};
pub use token::TokenStore;
