//! Object storage for listing images.
//!
//! Images are pushed to an unsigned upload endpoint (Cloudinary style)
//! as base64 data URIs; the store answers with a public URL that is
//! persisted verbatim on the listing. The trait exists so tests can
//! swap in a stub instead of a live endpoint.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use base64::Engine;
use roost_core::config::StorageConfig;
use salvo::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Destination for uploaded listing images.
pub trait ImageStore: Send + Sync {
    /// ## Summary
    /// Uploads one image and returns its public URL.
    ///
    /// ## Errors
    /// Returns `StorageError` if the upload fails.
    fn upload<'a>(
        &'a self,
        bytes: &'a [u8],
        content_type: &'a str,
    ) -> Pin<Box<dyn Future<Output = ServiceResult<String>> + Send + 'a>>;
}

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    file: String,
    upload_preset: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Encode image bytes as a `data:` URI the upload endpoint accepts.
fn data_uri(bytes: &[u8], content_type: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{content_type};base64,{encoded}")
}

/// An [`ImageStore`] backed by an HTTP upload endpoint.
pub struct HttpImageStore {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl HttpImageStore {
    /// ## Summary
    /// Builds an image store client for the configured endpoint.
    ///
    /// ## Errors
    /// Returns `StorageError` if the HTTP client cannot be constructed.
    pub fn new(storage: &StorageConfig) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ServiceError::StorageError(format!("Failed to build client: {e}")))?;

        Ok(Self {
            client,
            upload_url: storage.url.clone(),
            upload_preset: storage.preset.clone(),
        })
    }
}

impl ImageStore for HttpImageStore {
    fn upload<'a>(
        &'a self,
        bytes: &'a [u8],
        content_type: &'a str,
    ) -> Pin<Box<dyn Future<Output = ServiceResult<String>> + Send + 'a>> {
        Box::pin(async move {
            let body = UploadRequest {
                file: data_uri(bytes, content_type),
                upload_preset: &self.upload_preset,
            };

            let response = self
                .client
                .post(&self.upload_url)
                .json(&body)
                .send()
                .await
                .map_err(|e| ServiceError::StorageError(format!("Upload request failed: {e}")))?;

            if !response.status().is_success() {
                let status = response.status();
                return Err(ServiceError::StorageError(format!(
                    "Upload rejected with status {status}"
                )));
            }

            let parsed: UploadResponse = response
                .json()
                .await
                .map_err(|e| ServiceError::StorageError(format!("Invalid upload response: {e}")))?;

            tracing::debug!(url = %parsed.secure_url, "Uploaded listing image");

            Ok(parsed.secure_url)
        })
    }
}

/// Injects the configured image store (if any) into the depot.
///
/// Always hooked, even when storage is unconfigured; handlers that
/// receive an image part without a configured store answer with a
/// storage error rather than a missing-depot invariant violation.
pub struct StorageHandler {
    pub store: Option<Arc<dyn ImageStore>>,
}

#[async_trait]
impl salvo::Handler for StorageHandler {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.store.clone());
    }
}

/// ## Summary
/// Retrieves the image store from the depot.
///
/// ## Errors
/// Returns `InvariantViolation` if the handler was never hooked and
/// `StorageError` if storage is not configured.
pub fn get_image_store_from_depot(depot: &salvo::Depot) -> ServiceResult<Arc<dyn ImageStore>> {
    depot
        .obtain::<Option<Arc<dyn ImageStore>>>()
        .cloned()
        .map_err(|_err| ServiceError::InvariantViolation("Image store not found in depot"))?
        .ok_or_else(|| ServiceError::StorageError("Image storage is not configured".to_string()))
}
