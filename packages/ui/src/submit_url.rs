//! Submit a URL to the crawler queue (`POST /api/submit`), or straight to the
//! indexer (`POST /index-url`) when `[index] legacy` is set.

use api::{IndexUrlResponse, RequestError, SubmitStatus, SubmitUrlResponse};
use dioxus::prelude::*;

use crate::client::{use_api, use_config};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitNotice {
    pub kind: NoticeKind,
    pub message: String,
    /// Whether the input should be cleared.
    pub clear_input: bool,
}

impl SubmitNotice {
    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            clear_input: false,
        }
    }
}

pub fn queue_notice(response: &SubmitUrlResponse) -> SubmitNotice {
    let status = response.submit_status();
    SubmitNotice {
        kind: if status.is_info() { NoticeKind::Info } else { NoticeKind::Success },
        message: response.message.clone(),
        clear_input: status == SubmitStatus::Queued,
    }
}

pub fn index_notice(response: &IndexUrlResponse) -> SubmitNotice {
    if response.success {
        SubmitNotice {
            kind: NoticeKind::Success,
            message: "Successfully added to your Vault.".to_string(),
            clear_input: true,
        }
    } else {
        SubmitNotice::error(
            response
                .message
                .clone()
                .unwrap_or_else(|| "Failed to index URL.".to_string()),
        )
    }
}

/// The direct indexer only accepts absolute http(s) URLs.
pub fn validate_index_url(url: &str) -> Result<(), String> {
    if url.starts_with("http") {
        Ok(())
    } else {
        Err("Please enter a valid URL starting with http".to_string())
    }
}

#[component]
pub fn SubmitUrl() -> Element {
    let api = use_api();
    let legacy = use_config().index.legacy;
    let mut url = use_signal(String::new);
    let mut notice = use_signal(|| Option::<SubmitNotice>::None);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let trimmed = url().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        if legacy {
            if let Err(msg) = validate_index_url(&trimmed) {
                notice.set(Some(SubmitNotice::error(msg)));
                return;
            }
        }

        let api = api.clone();
        loading.set(true);
        notice.set(None);
        spawn(async move {
            let outcome = if legacy {
                api.index_url(&trimmed).await.map(|r| index_notice(&r))
            } else {
                api.submit_url(&trimmed).await.map(|r| queue_notice(&r))
            };
            let result = outcome.unwrap_or_else(|e: RequestError| {
                tracing::warn!("URL submission failed: {}", e);
                SubmitNotice::error(e.to_string())
            });
            if result.clear_input {
                url.set(String::new());
            }
            notice.set(Some(result));
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "submit-url",
            h3 { class: "submit-url__title", "Submit a URL to index" }
            form {
                class: "submit-url__form",
                onsubmit: onsubmit,
                input {
                    r#type: "url",
                    placeholder: "https://example.com/article",
                    value: "{url}",
                    oninput: move |evt: FormEvent| url.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading() || url().trim().is_empty(),
                    if loading() { "..." } else { "Submit" }
                }
            }
            if let Some(n) = notice() {
                p { class: n.kind.class(), "{n.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str) -> SubmitUrlResponse {
        SubmitUrlResponse {
            id: "1".to_string(),
            url: "https://example.com".to_string(),
            status: status.to_string(),
            message: format!("status {status}"),
        }
    }

    #[test]
    fn test_queued_is_success_and_clears() {
        let n = queue_notice(&response("queued"));
        assert_eq!(n.kind, NoticeKind::Success);
        assert!(n.clear_input);
        assert_eq!(n.message, "status queued");
    }

    #[test]
    fn test_exists_is_info_and_keeps_input() {
        for status in ["exists", "already_queued"] {
            let n = queue_notice(&response(status));
            assert_eq!(n.kind, NoticeKind::Info);
            assert!(!n.clear_input);
        }
    }

    #[test]
    fn test_unknown_status_defaults_to_success() {
        let n = queue_notice(&response("accepted"));
        assert_eq!(n.kind, NoticeKind::Success);
        assert!(!n.clear_input);
    }

    #[test]
    fn test_legacy_index_outcomes() {
        let ok = index_notice(&IndexUrlResponse {
            success: true,
            message: None,
        });
        assert!(ok.clear_input);
        let failed = index_notice(&IndexUrlResponse {
            success: false,
            message: None,
        });
        assert_eq!(failed.kind, NoticeKind::Error);
        assert_eq!(failed.message, "Failed to index URL.");
        assert!(validate_index_url("ftp://x").is_err());
        assert!(validate_index_url("https://x").is_ok());
    }
}
