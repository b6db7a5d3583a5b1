use crate::core::errors::DtMoneyError;
use crate::infrastructure::client::HttpClient;
use async_trait::async_trait;
use http::{Request, Response};

#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        ReqwestClient { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, DtMoneyError> {
        let request = reqwest::Request::try_from(request).map_err(|e| DtMoneyError::InvalidRequest(e.to_string()))?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| DtMoneyError::RequestFailed(e.to_string()))?;

        let mut builder = Response::builder().status(response.status());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(response.headers().clone());
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| DtMoneyError::RequestFailed(format!("Reading response body failed: {}", e)))?;
        builder
            .body(body.to_vec())
            .map_err(|e| DtMoneyError::InvalidResponse(e.to_string()))
    }
}
