//! HTTP translation backend speaking the LibreTranslate JSON protocol.

use pocodec::{Chunked, Error, Translator};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::{thread, time::Duration};
use tracing::warn;

use crate::config::BackendConfig;

const MAX_RETRIES: usize = 3;
const BASE_DELAY_MS: u64 = 800;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

fn backoff(attempt: usize) -> Duration {
    Duration::from_millis(BASE_DELAY_MS * 2_u64.pow(attempt as u32))
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::SERVICE_UNAVAILABLE
}

/// Blocking client for one translation endpoint.
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn new(config: &BackendConfig) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| format!("Error creating translation client: {}", e))?;
        Ok(HttpTranslator {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key()?,
        })
    }

    /// Wraps the client so oversized texts are split before sending.
    pub fn chunked(config: &BackendConfig) -> Result<Chunked<Self>, String> {
        Chunked::with_max_len(Self::new(config)?, config.max_chunk_len).map_err(|e| e.to_string())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for HttpTranslator {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, Error> {
        let body = TranslateRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let mut last_err = None;
        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                thread::sleep(backoff(attempt - 1));
            }

            let response = match self.client.post(&self.endpoint).json(&body).send() {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        "request to {} failed (attempt {}/{}): {}",
                        self.endpoint,
                        attempt + 1,
                        MAX_RETRIES,
                        e
                    );
                    last_err = Some(Error::translation_error(
                        format!("request to {} failed", self.endpoint),
                        Some(Box::new(e)),
                    ));
                    continue;
                }
            };

            let status = response.status();
            if is_retryable(status) {
                warn!(
                    "{} answered {} (attempt {}/{})",
                    self.endpoint,
                    status,
                    attempt + 1,
                    MAX_RETRIES
                );
                last_err = Some(Error::translation_error(
                    format!("{} answered {}", self.endpoint, status),
                    None,
                ));
                continue;
            }
            if !status.is_success() {
                let detail = response.text().unwrap_or_default();
                return Err(Error::translation_error(
                    format!("{} answered {}: {}", self.endpoint, status, detail.trim()),
                    None,
                ));
            }

            return response
                .json::<TranslateResponse>()
                .map(|parsed| parsed.translated_text)
                .map_err(|e| {
                    Error::translation_error("malformed translation response", Some(Box::new(e)))
                });
        }

        Err(last_err.unwrap_or_else(|| Error::translation_error("no attempt was made", None)))
    }
}
