//! Generic CRUD façade shared by every inventory resource.
//!
//! Each operation is split into a `build_*` step producing an `HttpRequest`
//! and a `parse_*` step consuming an `HttpResponse`; the async methods run
//! `build → Transport::execute → parse` exactly once. Nothing is retried,
//! cached, or applied locally ahead of the server.

use crate::config::endpoint::Endpoint;
use crate::domain::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::domain::ports::Transport;
use crate::domain::resource::{Envelope, Resource, ResourceId};
use crate::utils::error::{InventoryError, Result};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct ResourceClient<R: Resource> {
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
    envelope: Envelope,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: Arc::clone(&self.transport),
            envelope: self.envelope,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> std::fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::NAME)
            .field("endpoint", &self.endpoint)
            .field("envelope", &self.envelope)
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
            envelope: R::ENVELOPE,
            _resource: PhantomData,
        }
    }

    /// Overrides the resource's default response envelope.
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    pub fn resource_name(&self) -> &'static str {
        R::NAME
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn url(&self, action: &str) -> String {
        self.endpoint.url(&format!("{}/{}", R::NAME, action))
    }

    // ---- request building -------------------------------------------------

    pub fn build_create(&self, record: &R) -> Result<HttpRequest> {
        let body = serde_json::to_string(record)?;
        Ok(HttpRequest::new(HttpMethod::Post, self.url("create")).with_json_body(body))
    }

    pub fn build_create_all(&self, records: &[R]) -> Result<HttpRequest> {
        let body = serde_json::to_string(records)?;
        Ok(HttpRequest::new(HttpMethod::Post, self.url("createAll")).with_json_body(body))
    }

    pub fn build_get(&self, id: &R::Id) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(&format!("get/{}", id.to_path())))
    }

    pub fn build_get_all(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("getAll"))
    }

    pub fn build_get_by_parent(&self, parent_id: i64) -> Result<HttpRequest> {
        let parent = R::PARENT.ok_or_else(|| {
            InventoryError::precondition(format!(
                "'{}' records cannot be listed by parent",
                R::NAME
            ))
        })?;
        Ok(HttpRequest::new(
            HttpMethod::Get,
            self.url(&format!("getAll/{}/{}", parent, parent_id)),
        ))
    }

    pub fn build_update(&self, record: &R) -> Result<HttpRequest> {
        let id = record.id().ok_or_else(|| {
            InventoryError::precondition(format!(
                "cannot update a '{}' record without its identifier",
                R::NAME
            ))
        })?;
        let body = serde_json::to_string(record)?;
        Ok(
            HttpRequest::new(HttpMethod::Put, self.url(&format!("update/{}", id.to_path())))
                .with_json_body(body),
        )
    }

    pub fn build_delete(&self, id: &R::Id) -> HttpRequest {
        HttpRequest::new(
            HttpMethod::Delete,
            self.url(&format!("delete/{}", id.to_path())),
        )
    }

    // ---- response parsing -------------------------------------------------

    pub fn parse_record(&self, response: HttpResponse) -> Result<R> {
        check_status(&response)?;
        self.envelope.decode(&response.body)
    }

    pub fn parse_records(&self, response: HttpResponse) -> Result<Vec<R>> {
        check_status(&response)?;
        self.envelope.decode(&response.body)
    }

    /// Success carries no payload; the body is ignored.
    pub fn parse_empty(&self, response: HttpResponse) -> Result<()> {
        check_status(&response)
    }

    // ---- operations -------------------------------------------------------

    pub async fn create(&self, record: &R) -> Result<R> {
        let request = self.build_create(record)?;
        self.parse_record(self.send(request).await?)
    }

    /// One batch submission. The returned order is whatever the server sends.
    pub async fn create_all(&self, records: &[R]) -> Result<Vec<R>> {
        let request = self.build_create_all(records)?;
        self.parse_records(self.send(request).await?)
    }

    pub async fn get_by_id(&self, id: &R::Id) -> Result<R> {
        let request = self.build_get(id);
        self.parse_record(self.send(request).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<R>> {
        let request = self.build_get_all();
        self.parse_records(self.send(request).await?)
    }

    pub async fn get_by_parent(&self, parent_id: i64) -> Result<Vec<R>> {
        let request = self.build_get_by_parent(parent_id)?;
        self.parse_records(self.send(request).await?)
    }

    /// Full replace of the record identified by `record.id()`.
    pub async fn update(&self, record: &R) -> Result<R> {
        let request = self.build_update(record)?;
        self.parse_record(self.send(request).await?)
    }

    pub async fn delete(&self, id: &R::Id) -> Result<()> {
        let request = self.build_delete(id);
        self.parse_empty(self.send(request).await?)
    }

    /// `delete` for callers that only want a yes/no: a rejected request is
    /// `Ok(false)`. Transport failures still propagate.
    pub async fn delete_or_false(&self, id: &R::Id) -> Result<bool> {
        match self.delete(id).await {
            Ok(()) => Ok(true),
            Err(InventoryError::RequestFailed { status, message }) => {
                tracing::debug!(
                    "{} delete rejected ({}): {}",
                    R::NAME,
                    status,
                    message
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        tracing::debug!("📡 {} {}", request.method, request.url);
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            tracing::debug!("📡 {} response status: {}", R::NAME, response.status);
        } else {
            tracing::warn!("⚠️ {} response status: {}", R::NAME, response.status);
        }
        Ok(response)
    }
}

pub(crate) fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(InventoryError::RequestFailed {
        status: response.status,
        message: response.failure_message(),
    })
}
