//! Typed REST client shared by all resource pages.
//!
//! Every call resolves to `Result<_, ApiError>`: transport failures, non-2xx
//! statuses and undecodable bodies are all reported the same way.

use crate::shared::api_utils::api_base;
use contracts::domain::common::{AggregateRoot, RecordId};
use contracts::shared::api::{ApiError, ResourceEndpoints};
use contracts::shared::form::FormSchema;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Request body of create/update for `R`
pub type PayloadOf<R> = <<R as AggregateRoot>::Dto as FormSchema>::Payload;

pub struct ResourceClient<R> {
    endpoints: ResourceEndpoints,
    _record: PhantomData<fn() -> R>,
}

impl<R: AggregateRoot> ResourceClient<R> {
    pub fn new() -> Self {
        Self {
            endpoints: ResourceEndpoints::for_aggregate::<R>(&api_base()),
            _record: PhantomData,
        }
    }

    /// `GET {base}`
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        // cache buster, as the list is re-read after every refresh
        let url = format!(
            "{}?_ts={}",
            self.endpoints.collection(),
            js_sys::Date::now() as i64
        );
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(network)?;
        decode(check(response).await?).await
    }

    /// `POST {base}`
    pub async fn create(&self, payload: &PayloadOf<R>) -> Result<R, ApiError> {
        let url = self.endpoints.collection();
        log::debug!("POST {}", url);
        let response = Request::post(url)
            .json(payload)
            .map_err(encode)?
            .send()
            .await
            .map_err(network)?;
        decode(check(response).await?).await
    }

    /// `PUT {base}/{id}`
    pub async fn update(&self, id: &RecordId, payload: &PayloadOf<R>) -> Result<R, ApiError> {
        let url = self.endpoints.item(id);
        log::debug!("PUT {}", url);
        let response = Request::put(&url)
            .json(payload)
            .map_err(encode)?
            .send()
            .await
            .map_err(network)?;
        decode(check(response).await?).await
    }

    /// `PATCH {base}/{id}/toggle-status`
    pub async fn toggle_status(&self, id: &RecordId) -> Result<R, ApiError> {
        let url = self.endpoints.toggle_status(id);
        log::debug!("PATCH {}", url);
        let response = Request::patch(&url).send().await.map_err(network)?;
        decode(check(response).await?).await
    }

    /// `DELETE {base}/{id}`. The body is ignored; a non-2xx status is a failure.
    pub async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self.endpoints.item(id);
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url).send().await.map_err(network)?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::error!("{} {}", response.url(), error);
    Err(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to decode {}: {}", response.url(), e);
        ApiError::Decode(e.to_string())
    })
}

fn network(e: gloo_net::Error) -> ApiError {
    log::error!("Request failed: {}", e);
    ApiError::Network(e.to_string())
}

fn encode(e: gloo_net::Error) -> ApiError {
    ApiError::Encode(e.to_string())
}
