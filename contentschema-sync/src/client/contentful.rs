//! Contentful Management API implementation.
//!
//! Uses the CMA v1 content type and editor interface endpoints.

use super::management::ManagementClient;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use contentschema_model::{ContentType, EditorInterface, EditorInterfaceControl, Field};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info};

const CMA_MEDIA_TYPE: &str = "application/vnd.contentful.management.v1+json";
const VERSION_HEADER: &str = "X-Contentful-Version";

/// Connection settings for the Contentful Management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentfulConfig {
    /// Base URL of the API (e.g. `https://api.contentful.com`).
    pub api_base_url: String,
    /// Space holding the content model.
    pub space_id: String,
    /// Environment within the space.
    pub environment_id: String,
    /// Content management (personal access) token.
    pub management_token: String,
    /// Content types requested per page when listing.
    pub page_size: u32,
    /// Per-request timeout (in seconds).
    pub timeout_secs: u64,
}

impl Default for ContentfulConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.contentful.com".to_string(),
            space_id: String::new(),
            environment_id: "master".to_string(),
            management_token: String::new(),
            page_size: 100,
            timeout_secs: 60,
        }
    }
}

/// One page of a collection response.
#[derive(Debug, Deserialize)]
struct Collection<T> {
    items: Vec<T>,
    total: usize,
}

/// Writable part of a content type; `sys` travels in the URL and headers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentTypeBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_field: Option<&'a str>,
    fields: &'a [Field],
}

#[derive(Debug, Serialize)]
struct EditorInterfaceBody<'a> {
    controls: &'a [EditorInterfaceControl],
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

/// Contentful Management API client.
pub struct ContentfulClient {
    config: ContentfulConfig,
    client: Client,
}

impl ContentfulClient {
    /// Creates a client for the configured space and environment.
    pub fn new(config: ContentfulConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ContentfulConfig {
        &self.config
    }

    fn environment_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.space_id,
            self.config.environment_id
        )
    }

    fn content_type_url(&self, content_type_id: &str) -> String {
        format!("{}/content_types/{}", self.environment_url(), content_type_id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.management_token)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> ClientResult<Response> {
        self.authorized(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("{what} failed: {e}")))
    }

    async fn parse<T: for<'de> Deserialize<'de>>(
        response: Response,
        what: &str,
    ) -> ClientResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(format!("read {what} body failed: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Maps a non-success status onto the error taxonomy.
async fn check_status(
    response: Response,
    id: &str,
    version: Option<u64>,
) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::CONFLICT => ClientError::VersionConflict {
            id: id.to_string(),
            version,
        },
        StatusCode::NOT_FOUND => ClientError::NotFound(id.to_string()),
        other => ClientError::Api {
            status: other.as_u16(),
            message,
        },
    })
}

#[async_trait]
impl ManagementClient for ContentfulClient {
    async fn content_types(&self) -> ClientResult<Vec<ContentType>> {
        let url = format!("{}/content_types", self.environment_url());
        let limit = self.config.page_size.max(1).to_string();

        let mut all = Vec::new();
        let mut skip = 0usize;

        loop {
            let request = self
                .client
                .get(&url)
                .query(&[("skip", skip.to_string()), ("limit", limit.clone())]);
            let response = self.send(request, "content type list").await?;
            let response = check_status(response, "content_types", None).await?;
            let page: Collection<ContentType> = Self::parse(response, "content type list").await?;

            let received = page.items.len();
            all.extend(page.items);
            skip += received;

            debug!("Fetched {} of {} content types", skip, page.total);
            if received == 0 || skip >= page.total {
                break;
            }
        }

        Ok(all)
    }

    async fn create_or_update_content_type(
        &self,
        content_type: &ContentType,
        version: Option<u64>,
    ) -> ClientResult<ContentType> {
        let id = content_type.id();
        let body = ContentTypeBody {
            name: &content_type.name,
            description: content_type.description.as_deref(),
            display_field: content_type.display_field.as_deref(),
            fields: &content_type.fields,
        };

        let mut request = self
            .client
            .put(self.content_type_url(id))
            .header(CONTENT_TYPE, CMA_MEDIA_TYPE)
            .body(serde_json::to_vec(&body)?);
        if let Some(version) = version {
            request = request.header(VERSION_HEADER, version.to_string());
        }

        let response = self.send(request, "content type write").await?;
        let response = check_status(response, id, version).await?;
        let stored: ContentType = Self::parse(response, "content type").await?;

        info!("Stored content type {} (version {:?})", id, stored.version());
        Ok(stored)
    }

    async fn activate_content_type(&self, content_type_id: &str, version: u64) -> ClientResult<()> {
        let request = self
            .client
            .put(format!("{}/published", self.content_type_url(content_type_id)))
            .header(VERSION_HEADER, version.to_string());

        let response = self.send(request, "content type activation").await?;
        check_status(response, content_type_id, Some(version)).await?;

        info!("Activated content type {} at version {}", content_type_id, version);
        Ok(())
    }

    async fn editor_interface(&self, content_type_id: &str) -> ClientResult<EditorInterface> {
        let request = self
            .client
            .get(format!("{}/editor_interface", self.content_type_url(content_type_id)));

        let response = self.send(request, "editor interface fetch").await?;
        let response = check_status(response, content_type_id, None).await?;
        Self::parse(response, "editor interface").await
    }

    async fn update_editor_interface(
        &self,
        editor_interface: &EditorInterface,
        content_type_id: &str,
        version: u64,
    ) -> ClientResult<()> {
        let body = EditorInterfaceBody {
            controls: &editor_interface.controls,
            extra: &editor_interface.extra,
        };

        let request = self
            .client
            .put(format!("{}/editor_interface", self.content_type_url(content_type_id)))
            .header(CONTENT_TYPE, CMA_MEDIA_TYPE)
            .header(VERSION_HEADER, version.to_string())
            .body(serde_json::to_vec(&body)?);

        let response = self.send(request, "editor interface update").await?;
        check_status(response, content_type_id, Some(version)).await?;

        info!("Updated editor interface of {}", content_type_id);
        Ok(())
    }
}
