use crate::core::errors::DtMoneyError;
use crate::infrastructure::client::HttpClient;
use async_trait::async_trait;
use axum::{Router, body::Body};
use http::{Request, Response};
use tower::ServiceExt;

/// Sends requests straight into an axum `Router` without opening a socket.
#[derive(Clone)]
pub struct RouterClient {
    router: Router,
}

impl RouterClient {
    pub fn new(router: Router) -> Self {
        RouterClient { router }
    }
}

#[async_trait]
impl HttpClient for RouterClient {
    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, DtMoneyError> {
        let response = match self.router.clone().oneshot(request.map(Body::from)).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| DtMoneyError::RequestFailed(format!("Reading response body failed: {}", e)))?;
        Ok(Response::from_parts(parts, bytes.to_vec()))
    }
}
