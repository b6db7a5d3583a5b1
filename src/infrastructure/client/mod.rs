pub mod in_process;
pub mod network;

use crate::core::errors::DtMoneyError;
use async_trait::async_trait;
use http::{Request, Response};

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and buffer the whole response body.
    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, DtMoneyError>;
}
