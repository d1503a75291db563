// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cloud management API client library
//!
//! Typed access to the cloud management REST API: backup units, images,
//! CD-ROMs, IP blocks, private cross-connects, templates and requests.
//!
//! ## Usage
//!
//! ```ignore
//! use cloud_client::{AuthConfig, TypedClient};
//!
//! let client = TypedClient::new(
//!     "https://api.ionos.com/cloudapi/v6",
//!     AuthConfig::token(std::env::var("CLOUDCTL_TOKEN")?),
//! )?;
//!
//! let units = client.list_backup_units(1).await?;
//!
//! // Mutations are asynchronous on the server side; the returned
//! // request reference can be polled until the job finishes.
//! let accepted = client.delete_backup_unit(&units[0].id).await?;
//! if let Some(request) = accepted.request {
//!     let status = client.get_request_status(&request).await?;
//! }
//! ```

pub mod auth;
mod error;

use reqwest::header::LOCATION;
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub use auth::{AuthConfig, Credentials};
pub use error::Error;

// Re-export types from the API crate for convenience
pub use cloud_api::{
    ApiError, ApiInfo, AttachCdromRequest, BackupUnit, BackupUnitProperties, BackupUnitSso, Cdrom,
    Collection, ConnectableDatacenter, CreateIpBlockRequest, CreateRequest, DEFAULT_API_URL,
    Image, ImageProperties, ImageType, IpBlock, IpBlockProperties, IpConsumer, Metadata,
    PccProperties, PccRequest, Peer, PrivateCrossConnect, Request, RequestMetadata,
    RequestProperties, RequestState, RequestStatus, RequestTarget, Resource, ResourceReference,
    ResourceState, Template, TemplateProperties, Timestamp, UpdateBackupUnitRequest,
    UpdateImageRequest, UpdateIpBlockRequest,
};

/// Pointer to the request record tracking an accepted mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRef {
    /// Request id
    pub id: String,
    /// Absolute URL of the request's status endpoint
    pub status_href: String,
}

impl RequestRef {
    /// Parse the `Location` header of an accepted mutation
    ///
    /// The header points at `.../requests/{id}/status`.
    pub fn from_location(location: &str) -> Option<Self> {
        let url = Url::parse(location).ok()?;
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
        let id = match segments.as_slice() {
            [.., "requests", id, "status"] => (*id).to_string(),
            [.., "requests", id] => (*id).to_string(),
            _ => return None,
        };
        let status_href = if location.trim_end_matches('/').ends_with("/status") {
            location.to_string()
        } else {
            format!("{}/status", location.trim_end_matches('/'))
        };
        Some(Self { id, status_href })
    }
}

/// Result of a mutating call
///
/// The API applies mutations asynchronously. `value` is what the API
/// returned immediately; `request` tracks the job that applies it.
#[derive(Debug, Clone)]
pub struct Accepted<T> {
    pub value: T,
    pub request: Option<RequestRef>,
}

/// Typed client for the cloud management API
///
/// All requests are authenticated with the [`AuthConfig`] given at
/// construction. List and get calls take a `depth` controlling how much of
/// each nested resource is expanded by the server.
pub struct TypedClient {
    http: reqwest::Client,
    base_url: String,
    auth_config: AuthConfig,
}

impl TypedClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g., "https://api.ionos.com/cloudapi/v6")
    /// * `auth_config` - Authentication configuration
    pub fn new(base_url: &str, auth_config: AuthConfig) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("cloudctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authentication configuration
    pub fn auth_config(&self) -> &AuthConfig {
        &self.auth_config
    }

    /// API name and version; also a cheap way to check credentials
    pub async fn get_api_info(&self) -> Result<ApiInfo, Error> {
        let url = parse_url(&format!("{}/", self.base_url))?;
        let response = self.execute(Method::GET, url, None::<&()>).await?;
        decode(response).await
    }

    // ========================================================================
    // Backup Units
    // ========================================================================

    pub async fn list_backup_units(&self, depth: u32) -> Result<Vec<BackupUnit>, Error> {
        self.list(&["backupunits"], depth).await
    }

    pub async fn get_backup_unit(&self, id: &str, depth: u32) -> Result<BackupUnit, Error> {
        self.get(&["backupunits", id], depth).await
    }

    pub async fn create_backup_unit(
        &self,
        properties: BackupUnitProperties,
    ) -> Result<Accepted<BackupUnit>, Error> {
        self.mutate(
            Method::POST,
            &["backupunits"],
            Some(&CreateRequest::new(properties)),
        )
        .await
    }

    /// Change the password and/or email of a backup unit
    pub async fn update_backup_unit(
        &self,
        id: &str,
        request: &UpdateBackupUnitRequest,
    ) -> Result<Accepted<BackupUnit>, Error> {
        self.mutate(Method::PATCH, &["backupunits", id], Some(request))
            .await
    }

    pub async fn delete_backup_unit(&self, id: &str) -> Result<Accepted<()>, Error> {
        self.delete(&["backupunits", id]).await
    }

    /// Single sign-on URL for the backup portal of a backup unit
    pub async fn get_backup_unit_sso_url(&self, id: &str) -> Result<BackupUnitSso, Error> {
        self.get(&["backupunits", id, "ssourl"], 0).await
    }

    // ========================================================================
    // CD-ROMs
    // ========================================================================

    pub async fn list_cdroms(
        &self,
        datacenter: &str,
        server: &str,
        depth: u32,
    ) -> Result<Vec<Cdrom>, Error> {
        self.list(&cdroms_path(datacenter, server, None), depth).await
    }

    pub async fn get_cdrom(
        &self,
        datacenter: &str,
        server: &str,
        id: &str,
        depth: u32,
    ) -> Result<Cdrom, Error> {
        self.get(&cdroms_path(datacenter, server, Some(id)), depth)
            .await
    }

    /// Attach a CD-ROM image to a server
    pub async fn attach_cdrom(
        &self,
        datacenter: &str,
        server: &str,
        image_id: &str,
    ) -> Result<Accepted<Cdrom>, Error> {
        let body = AttachCdromRequest {
            id: image_id.to_string(),
        };
        self.mutate(Method::POST, &cdroms_path(datacenter, server, None), Some(&body))
            .await
    }

    /// Detach a CD-ROM from a server
    pub async fn detach_cdrom(
        &self,
        datacenter: &str,
        server: &str,
        id: &str,
    ) -> Result<Accepted<()>, Error> {
        self.delete(&cdroms_path(datacenter, server, Some(id)))
            .await
    }

    // ========================================================================
    // Images
    // ========================================================================

    pub async fn list_images(&self, depth: u32) -> Result<Vec<Image>, Error> {
        self.list(&["images"], depth).await
    }

    pub async fn get_image(&self, id: &str, depth: u32) -> Result<Image, Error> {
        self.get(&["images", id], depth).await
    }

    pub async fn update_image(
        &self,
        id: &str,
        request: &UpdateImageRequest,
    ) -> Result<Accepted<Image>, Error> {
        self.mutate(Method::PATCH, &["images", id], Some(request))
            .await
    }

    pub async fn delete_image(&self, id: &str) -> Result<Accepted<()>, Error> {
        self.delete(&["images", id]).await
    }

    // ========================================================================
    // IP Blocks
    // ========================================================================

    pub async fn list_ip_blocks(&self, depth: u32) -> Result<Vec<IpBlock>, Error> {
        self.list(&["ipblocks"], depth).await
    }

    pub async fn get_ip_block(&self, id: &str, depth: u32) -> Result<IpBlock, Error> {
        self.get(&["ipblocks", id], depth).await
    }

    /// Reserve a new IP block
    pub async fn create_ip_block(
        &self,
        request: CreateIpBlockRequest,
    ) -> Result<Accepted<IpBlock>, Error> {
        self.mutate(Method::POST, &["ipblocks"], Some(&CreateRequest::new(request)))
            .await
    }

    pub async fn update_ip_block(
        &self,
        id: &str,
        request: &UpdateIpBlockRequest,
    ) -> Result<Accepted<IpBlock>, Error> {
        self.mutate(Method::PATCH, &["ipblocks", id], Some(request))
            .await
    }

    /// Release an IP block
    pub async fn delete_ip_block(&self, id: &str) -> Result<Accepted<()>, Error> {
        self.delete(&["ipblocks", id]).await
    }

    // ========================================================================
    // Private Cross-Connects
    // ========================================================================

    pub async fn list_pccs(&self, depth: u32) -> Result<Vec<PrivateCrossConnect>, Error> {
        self.list(&["pccs"], depth).await
    }

    pub async fn get_pcc(&self, id: &str, depth: u32) -> Result<PrivateCrossConnect, Error> {
        self.get(&["pccs", id], depth).await
    }

    pub async fn create_pcc(
        &self,
        request: PccRequest,
    ) -> Result<Accepted<PrivateCrossConnect>, Error> {
        self.mutate(Method::POST, &["pccs"], Some(&CreateRequest::new(request)))
            .await
    }

    pub async fn update_pcc(
        &self,
        id: &str,
        request: &PccRequest,
    ) -> Result<Accepted<PrivateCrossConnect>, Error> {
        self.mutate(Method::PATCH, &["pccs", id], Some(request))
            .await
    }

    pub async fn delete_pcc(&self, id: &str) -> Result<Accepted<()>, Error> {
        self.delete(&["pccs", id]).await
    }

    // ========================================================================
    // Requests
    // ========================================================================

    pub async fn list_requests(&self, depth: u32) -> Result<Vec<Request>, Error> {
        self.list(&["requests"], depth).await
    }

    pub async fn get_request(&self, id: &str, depth: u32) -> Result<Request, Error> {
        self.get(&["requests", id], depth).await
    }

    /// Reference to a request known only by id
    pub fn request_status_ref(&self, id: &str) -> Result<RequestRef, Error> {
        let url = self.url(&["requests", id, "status"], None)?;
        Ok(RequestRef {
            id: id.to_string(),
            status_href: url.into(),
        })
    }

    /// Fetch the current status of a request
    pub async fn get_request_status(&self, request: &RequestRef) -> Result<RequestStatus, Error> {
        let url = parse_url(&request.status_href)?;
        let response = self.execute(Method::GET, url, None::<&()>).await?;
        decode(response).await
    }

    // ========================================================================
    // Templates
    // ========================================================================

    pub async fn list_templates(&self, depth: u32) -> Result<Vec<Template>, Error> {
        self.list(&["templates"], depth).await
    }

    pub async fn get_template(&self, id: &str, depth: u32) -> Result<Template, Error> {
        self.get(&["templates", id], depth).await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    /// Resolve path segments against the base URL
    ///
    /// Each segment is percent-encoded, so ids cannot change the path shape.
    fn url(&self, segments: &[&str], depth: Option<u32>) -> Result<Url, Error> {
        let mut url = parse_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl {
                url: self.base_url.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .extend(segments);
        if let Some(depth) = depth {
            url.query_pairs_mut()
                .append_pair("depth", &depth.to_string());
        }
        Ok(url)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        path: &[&str],
        depth: u32,
    ) -> Result<Vec<T>, Error> {
        let collection: Collection<T> = self.get(path, depth).await?;
        Ok(collection.into_items())
    }

    async fn get<T: DeserializeOwned>(&self, path: &[&str], depth: u32) -> Result<T, Error> {
        let url = self.url(path, Some(depth))?;
        let response = self.execute(Method::GET, url, None::<&()>).await?;
        decode(response).await
    }

    async fn mutate<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> Result<Accepted<T>, Error> {
        let url = self.url(path, None)?;
        let response = self.execute(method, url, body).await?;
        let request = request_ref(&response);
        let value = decode(response).await?;
        Ok(Accepted { value, request })
    }

    async fn delete(&self, path: &[&str]) -> Result<Accepted<()>, Error> {
        let url = self.url(path, None)?;
        let response = self.execute(Method::DELETE, url, None::<&()>).await?;
        Ok(Accepted {
            value: (),
            request: request_ref(&response),
        })
    }

    /// Sign and send a request, turning non-success statuses into
    /// [`Error::Api`]
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, Error> {
        tracing::debug!(%method, %url, "sending API request");

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let mut request = builder.build()?;
        auth::add_auth_headers(&self.auth_config, &mut request)?;

        let response = self.http.execute(request).await?;
        let status = response.status();
        tracing::debug!(%status, "received API response");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ApiError>(&text).unwrap_or_else(|_| ApiError {
            http_status: Some(status.as_u16()),
            messages: vec![cloud_api::ApiErrorMessage {
                error_code: None,
                message: if text.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    text
                },
            }],
        });
        Err(Error::Api { status, body })
    }
}

fn cdroms_path<'a>(datacenter: &'a str, server: &'a str, id: Option<&'a str>) -> Vec<&'a str> {
    let mut segments = vec!["datacenters", datacenter, "servers", server, "cdroms"];
    segments.extend(id);
    segments
}

fn parse_url(raw: &str) -> Result<Url, Error> {
    Url::parse(raw).map_err(|source| Error::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn request_ref(response: &Response) -> Option<RequestRef> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .and_then(RequestRef::from_location)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
