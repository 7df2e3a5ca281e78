use crate::adapters::http::ReqwestTransport;
use crate::config::endpoint::Endpoint;
use crate::config::toml_config::ClientConfig;
use crate::core::client::ResourceClient;
use crate::domain::model::{
    Batch, Configuration, Coordinator, District, Division, Municipality, Package, Provider, School,
    SchoolBatchList, SchoolContact, SchoolEnergy, SchoolNtc, User,
};
use crate::domain::ports::Transport;
use crate::domain::resource::{Envelope, Resource};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out a `ResourceClient` per resource, all sharing one endpoint and
/// one transport.
#[derive(Clone)]
pub struct InventoryApi {
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
    envelopes: HashMap<String, Envelope>,
}

impl InventoryApi {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
            envelopes: HashMap::new(),
        }
    }

    pub fn with_reqwest(endpoint: Endpoint) -> Self {
        Self::new(endpoint, Arc::new(ReqwestTransport::new()))
    }

    /// 由設定檔建立；`base_url_override` 優先於設定檔與環境變數
    pub fn from_config(config: &ClientConfig, base_url_override: Option<&str>) -> Result<Self> {
        let endpoint = config.endpoint(base_url_override)?;
        tracing::debug!("Using API base address {}", endpoint.base_url());

        let mut api = Self::with_reqwest(endpoint);
        for (resource, envelope) in &config.envelopes {
            api = api.with_envelope_override(resource, *envelope);
        }
        Ok(api)
    }

    pub fn with_envelope_override(mut self, resource: &str, envelope: Envelope) -> Self {
        self.envelopes.insert(resource.to_string(), envelope);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn client<R: Resource>(&self) -> ResourceClient<R> {
        let client = ResourceClient::new(self.endpoint.clone(), Arc::clone(&self.transport));
        match self.envelopes.get(R::NAME) {
            Some(envelope) => client.with_envelope(*envelope),
            None => client,
        }
    }

    pub fn batches(&self) -> ResourceClient<Batch> {
        self.client()
    }

    pub fn configurations(&self) -> ResourceClient<Configuration> {
        self.client()
    }

    pub fn coordinators(&self) -> ResourceClient<Coordinator> {
        self.client()
    }

    pub fn districts(&self) -> ResourceClient<District> {
        self.client()
    }

    pub fn divisions(&self) -> ResourceClient<Division> {
        self.client()
    }

    pub fn municipalities(&self) -> ResourceClient<Municipality> {
        self.client()
    }

    pub fn packages(&self) -> ResourceClient<Package> {
        self.client()
    }

    pub fn schools(&self) -> ResourceClient<School> {
        self.client()
    }

    pub fn school_batch_lists(&self) -> ResourceClient<SchoolBatchList> {
        self.client()
    }

    pub fn school_contacts(&self) -> ResourceClient<SchoolContact> {
        self.client()
    }

    pub fn school_energy(&self) -> ResourceClient<SchoolEnergy> {
        self.client()
    }

    pub fn school_ntc(&self) -> ResourceClient<SchoolNtc> {
        self.client()
    }

    pub fn providers(&self) -> ResourceClient<Provider> {
        self.client()
    }

    pub fn users(&self) -> ResourceClient<User> {
        self.client()
    }
}
