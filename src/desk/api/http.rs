use crate::desk::api::{ApiError, BillingApi};
use crate::desk::model::bill::{Bill, CreateBillRequest, ErrorResponse};
use crate::desk::model::product::Product;
use log::{info, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// reqwest backed [`BillingApi`].
pub(crate) struct HttpBillingApi {
    client: Client,
    base_url: Url,
}

impl HttpBillingApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Url(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Url(base_url.to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Request)?;
        Ok(Self { client, base_url })
    }

    /// Append path segments to the base url. Each segment is percent
    /// encoded, so an email cannot escape its segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let status = res.status();
        if status.is_success() {
            return res.json::<T>().await.map_err(ApiError::Request);
        }
        let detail = res
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message());
        warn!("backend returned status={}, detail={:?}", status, detail);
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

impl BillingApi for HttpBillingApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint(&["api", "products", ""])?;
        info!("loading products from {}", url);
        let res = self.client.get(url).send().await.map_err(ApiError::Request)?;
        Self::decode(res).await
    }

    async fn create_bill(&self, request: &CreateBillRequest) -> Result<Bill, ApiError> {
        let url = self.endpoint(&["api", "bills", ""])?;
        info!(
            "posting bill for customer={} with {} item(s)",
            request.customer_email,
            request.items.len()
        );
        let res = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Request)?;
        Self::decode(res).await
    }

    async fn customer_bills(&self, customer_email: &str) -> Result<Vec<Bill>, ApiError> {
        let url = self.endpoint(&["api", "bills", customer_email])?;
        info!("fetching previous bills for customer={}", customer_email);
        let res = self.client.get(url).send().await.map_err(ApiError::Request)?;
        Self::decode(res).await
    }
}
