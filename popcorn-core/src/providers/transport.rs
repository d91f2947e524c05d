use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoints::ApiRequest;
use crate::error::{FetchError, Result};

/// Issues GET requests against the metadata API.
///
/// Implementations append credentials and map failures into
/// [`FetchError`]; they never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Fetch `request` and return the parsed JSON body.
    async fn get_json(&self, request: &ApiRequest) -> Result<Value>;
}

/// Fetch `request` and decode the body into `T`.
pub async fn get_typed<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    request: &ApiRequest,
) -> Result<T> {
    let body = transport.get_json(request).await?;
    serde_json::from_value(body).map_err(|err| {
        FetchError::Decode(format!("{}: {err}", request.path()))
    })
}
