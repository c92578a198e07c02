//! HTTP-клиент для запросов к API.
//!
//! Авторизация: заголовок `Authorization: Bearer …` из localStorage плюс
//! cookie браузера (`credentials: include`). Никаких зашитых cookie.

use crate::shared::list_controller::{BulkTransport, TransportError};
use crate::system::auth::storage;
use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use web_sys::RequestCredentials;

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match storage::auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

async fn send_with_timeout<F>(request: F, timeout_ms: Option<u32>) -> Result<Response, TransportError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let Some(ms) = timeout_ms else {
        return request
            .await
            .map_err(|e| TransportError::Network(e.to_string()));
    };

    match select(Box::pin(request), Box::pin(TimeoutFuture::new(ms))).await {
        Either::Left((result, _)) => result.map_err(|e| TransportError::Network(e.to_string())),
        Either::Right(_) => Err(TransportError::Timeout(ms)),
    }
}

/// Транспорт массовых операций поверх `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport {
    timeout_ms: Option<u32>,
}

impl GlooTransport {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl BulkTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<u16, TransportError> {
        let request = authorize(Request::post(url))
            .json(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?;
        let response = send_with_timeout(request.send(), self.timeout_ms).await?;
        Ok(response.status())
    }
}

/// GET с разбором JSON-ответа
pub async fn get_json<T>(url: &str, timeout_ms: Option<u32>) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let request = authorize(Request::get(url).header("Accept", "application/json"))
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = send_with_timeout(request.send(), timeout_ms)
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}
