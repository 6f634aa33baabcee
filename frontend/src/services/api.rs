use admin_domain::records::AdminResource;
use admin_domain::session::Session;
use admin_domain::{AdminConfig, FetchError, RecordSource};
use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{ListEnvelope, ProductUpsert};
use std::marker::PhantomData;

/// API client for the admin REST backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    authorization: Option<String>,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::from_config(&AdminConfig::default())
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::with_base_url(config.api_root().to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: None,
        }
    }

    /// Send the session token with every request
    pub fn with_session(mut self, session: &Session) -> Self {
        self.authorization = Some(session.authorization_header());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/{}", self.base_url, collection)
    }

    /// Fetch the whole collection of `R`
    pub async fn list<R: AdminResource>(&self) -> Result<Vec<R>, FetchError> {
        let url = self.collection_url(R::COLLECTION);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to fetch {}: {}", R::COLLECTION, e)))?;

        let body = read_body(response).await?;
        parse_list(&body)
    }

    /// Create or update a product from the wizard
    pub async fn save_product(&self, upsert: &ProductUpsert) -> Result<(), FetchError> {
        let products = self.collection_url("products");
        let request = match upsert {
            ProductUpsert::Create { product } => self.authorize(Request::post(&products)).json(product),
            ProductUpsert::Update { id, product } => {
                self.authorize(Request::put(&format!("{}/{}", products, id))).json(product)
            }
        }
        .map_err(|e| FetchError::Other(format!("Failed to serialize product: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to save product: {}", e)))?;
        read_body(response).await.map(|_| ())
    }

    fn authorize(&self, builder: gloo::net::http::RequestBuilder) -> gloo::net::http::RequestBuilder {
        match &self.authorization {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;

    if response.ok() {
        Ok(body)
    } else {
        Err(status_error(status, &response.status_text(), &body))
    }
}

fn status_error(status: u16, status_text: &str, body: &str) -> FetchError {
    let body = body.trim();
    let message = if body.is_empty() { status_text } else { body };
    FetchError::Status {
        status,
        message: message.to_string(),
    }
}

fn parse_list<R: AdminResource>(body: &str) -> Result<Vec<R>, FetchError> {
    let envelope: ListEnvelope<R> = serde_json::from_str(body)?;
    Ok(envelope.into_records())
}

/// [`RecordSource`] over one REST collection
pub struct ResourceSource<R> {
    client: ApiClient,
    _record: PhantomData<fn() -> R>,
}

impl<R> ResourceSource<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }
}

impl<R> Clone for ResourceSource<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R> PartialEq for ResourceSource<R> {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client
    }
}

#[async_trait(?Send)]
impl<R: AdminResource> RecordSource<R> for ResourceSource<R> {
    async fn fetch(&self) -> Result<Vec<R>, FetchError> {
        self.client.list::<R>().await
    }
}
