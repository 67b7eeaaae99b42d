//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::WebStorage`]
//! - **Native**: a file under the platform data dir via [`store::FileStore`]
//! - **WASM without `web`**: in-memory via [`store::MemoryStore`]
//!
//! [`ApiProvider`] builds the client and the [`ClientConfig`] once and puts both in
//! context; components reach them with [`use_api`] and [`use_config`].

use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokens = store::WebStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokens = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokens = store::FileStore;

pub type Api = ApiClient<PlatformTokens>;

/// Backend used by native builds when `notice.toml` leaves `base_url` empty.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Load the client configuration for this platform.
///
/// The browser build takes the API base from `NOTICE_API_URL` at compile time, or
/// the page origin. Native builds read `notice.toml` from the config directory.
pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let base = option_env!("NOTICE_API_URL")
            .map(str::to_string)
            .or_else(|| web_sys::window().and_then(|w| w.location().origin().ok()))
            .unwrap_or_default();
        ClientConfig::new(&base)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("notice")
            .join(ClientConfig::filename());
        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => ClientConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                ClientConfig::default()
            }),
            Err(_) => ClientConfig::default(),
        };
        if config.api.base_url.is_empty() {
            config.api.base_url = NATIVE_DEFAULT_BASE_URL.to_string();
        }
        config
    }
}

/// Create the platform token store for the configured key.
pub fn make_tokens(config: &ClientConfig) -> PlatformTokens {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStorage::with_key(&config.auth.token_key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("notice");
        store::FileStore::with_key(base, &config.auth.token_key)
    }
}

pub fn make_client(config: &ClientConfig) -> Api {
    ApiClient::from_config(config, make_tokens(config))
}

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provides the [`ClientConfig`] and the [`Api`] client to its children.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(move || {
        tracing::info!("Using backend at {:?}", config.api.base_url);
        make_client(&config)
    });

    rsx! {
        {children}
    }
}

/// Sleep helper for periodic tasks and the countdown tick.
pub(crate) async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
