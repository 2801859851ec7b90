/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use reqwest::header::{
    ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, LOCATION, RETRY_AFTER, USER_AGENT,
};
use reqwest::{Client as HttpClient, ClientBuilder, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::actions::{Action, discover_actions};
use crate::classify::ResponseClassifier;
use crate::error::{RedfishError, RedfishResult};
use crate::model::OperationOutcome;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const MAX_BODY_LEN: u64 = 20 * 1024 * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Https => write!(f, "https"),
            Scheme::Http => write!(f, "http"),
        }
    }
}

/// Who to talk to and how to authenticate. When `token` is set it is
/// sent as `X-Auth-Token` and basic auth is not sent at all.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub username: String,
    pub password: String,
    pub token: Option<String>,
}

impl Credentials {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Credentials {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

// Keep passwords and tokens out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Connection settings shared by every client the registry builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportSettings {
    pub scheme: Scheme,
    pub accept_invalid_certs: bool,
    pub timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        TransportSettings {
            scheme: Scheme::Https,
            accept_invalid_certs: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub credentials: Credentials,
    pub settings: TransportSettings,
}

impl Endpoint {
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.settings.scheme, self.credentials.host)
    }

    // url joins a resource path onto the base URL. Absolute URLs are
    // passed through, some BMCs hand those out in Location headers.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url(), path)
    }
}

/// One HTTP response, fully read.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        RawResponse {
            url: url.into(),
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION.as_str())
    }

    // retry_after only understands the delay-seconds form. iDRAC does
    // not send HTTP dates here.
    pub fn retry_after(&self) -> Option<Duration> {
        self.header(RETRY_AFTER.as_str())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    // json parses the body. An empty body is JSON null, 204s have none.
    pub fn json(&self) -> RedfishResult<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body).map_err(|source| RedfishError::JsonDeserialize {
            url: self.url.clone(),
            body: truncate(&self.body, 1500).to_string(),
            source,
        })
    }
}

// Transport is the seam between the orchestrator and the wire. The
// poller only needs this, which keeps it testable with scripted
// responses.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> RedfishResult<RawResponse>;
}

#[derive(Debug)]
pub struct RedfishClient {
    endpoint: Endpoint,
    client: HttpClient,
    classifier: ResponseClassifier,
}

impl RedfishClient {
    pub fn new(endpoint: Endpoint) -> RedfishResult<Self> {
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(endpoint.settings.accept_invalid_certs)
            .timeout(endpoint.settings.timeout)
            .build()?;

        Ok(RedfishClient {
            endpoint,
            client,
            classifier: ResponseClassifier::default(),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn classifier(&self) -> &ResponseClassifier {
        &self.classifier
    }

    // get_json fetches a resource that must exist. 404 goes through the
    // classifier and comes back as Forbidden.
    pub async fn get_json(&self, path: &str) -> RedfishResult<Value> {
        let response = self.execute(Method::GET, path, None).await?;
        self.read_classified(response)
    }

    // get_optional fetches a resource that may legitimately be gone,
    // e.g. a job the BMC already purged. 404 and 410 are None.
    pub async fn get_optional(&self, path: &str) -> RedfishResult<Option<Value>> {
        let response = self.execute(Method::GET, path, None).await?;
        if response.status == 404 || response.status == 410 {
            debug!("{} not found ({})", response.url, response.status);
            return Ok(None);
        }
        self.read_classified(response).map(Some)
    }

    // read_classified parses the body of a GET. A recoverable Error
    // outcome is still a failed read.
    fn read_classified(&self, response: RawResponse) -> RedfishResult<Value> {
        let (outcome, error) = self.classifier.classify_with_error(&response, 200, None)?;
        if outcome == OperationOutcome::Error {
            let reason = match error {
                Some(error) => format!("HTTP {}: {error}", response.status),
                None => format!("HTTP {}", response.status),
            };
            return Err(RedfishError::UnexpectedResponse {
                url: response.url,
                reason,
            });
        }
        response.json()
    }

    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<(OperationOutcome, RawResponse)> {
        self.send_classified(Method::POST, path, Some(body), expected, ignorable)
            .await
    }

    pub async fn patch(
        &self,
        path: &str,
        body: &Value,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<(OperationOutcome, RawResponse)> {
        self.send_classified(Method::PATCH, path, Some(body), expected, ignorable)
            .await
    }

    pub async fn delete(
        &self,
        path: &str,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<(OperationOutcome, RawResponse)> {
        self.send_classified(Method::DELETE, path, None, expected, ignorable)
            .await
    }

    // invoke_action posts to a discovered action's target.
    pub async fn invoke_action(
        &self,
        action: &Action,
        body: &Value,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<(OperationOutcome, RawResponse)> {
        debug!("Invoking {} at {}", action.full_vendor_name, action.target);
        self.post(&action.target, body, expected, ignorable).await
    }

    // members returns the Members array of a collection. Entries are
    // returned as-is, links or expanded objects.
    pub async fn members(&self, path: &str) -> RedfishResult<Vec<Value>> {
        let collection = self.get_json(path).await?;
        match collection.get("Members") {
            Some(Value::Array(members)) => Ok(members.clone()),
            Some(_) => Err(RedfishError::UnexpectedResponse {
                url: self.endpoint.url(path),
                reason: "Members is not an array".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    // discover_collection_actions unions the actions of every member of
    // a collection, fetching members that are only links.
    pub async fn discover_collection_actions(
        &self,
        path: &str,
    ) -> RedfishResult<HashMap<String, Action>> {
        let mut discovered = HashMap::new();
        for member in self.members(path).await? {
            let resource = match member_link(&member) {
                Some(link) => self.get_json(link).await?,
                None => member,
            };
            discovered.extend(discover_actions(&resource));
        }
        Ok(discovered)
    }

    async fn send_classified(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        expected: u16,
        ignorable: Option<u16>,
    ) -> RedfishResult<(OperationOutcome, RawResponse)> {
        let response = self.execute(method, path, body).await?;
        let outcome = self.classifier.classify(&response, expected, ignorable)?;
        Ok((outcome, response))
    }
}

#[async_trait::async_trait]
impl Transport for RedfishClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> RedfishResult<RawResponse> {
        let url = self.endpoint.url(path);

        let mut req_b = self.client.request(method.clone(), &url);
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("application/json"));
        req_b = req_b.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static("libidrac/0.1"));
        let credentials = &self.endpoint.credentials;
        req_b = match credentials.token.as_ref() {
            Some(token) => req_b.header(AUTH_TOKEN_HEADER, token),
            None => req_b.basic_auth(&credentials.username, Some(&credentials.password)),
        };
        if let Some(b) = body {
            debug!("TX {method} {url} {}", truncate(&b.to_string(), 1500));
            req_b = req_b.json(b);
        } else {
            debug!("TX {method} {url}");
        }

        let response = req_b.send().await.map_err(|e| RedfishError::Network {
            url: url.clone(),
            source: e,
        })?;
        let status = response.status().as_u16();
        // check content length in case of junk responses
        if let Some(len) = response.content_length()
            && len > MAX_BODY_LEN
        {
            return Err(RedfishError::UnexpectedResponse {
                url,
                reason: format!("Content length {len} exceeds 20MB limit"),
            });
        }
        let headers = response.headers().clone();
        let response_buffer = response.bytes().await.map_err(|e| RedfishError::Network {
            url: url.clone(),
            source: e,
        })?;
        let body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status} {}", truncate(&body, 1500));

        Ok(RawResponse {
            url,
            status,
            headers,
            body,
        })
    }
}

// member_link returns the @odata.id of a collection member that carries
// nothing else.
pub(crate) fn member_link(member: &Value) -> Option<&str> {
    let object = member.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.get("@odata.id").and_then(Value::as_str)
}

pub(crate) fn truncate(s: &str, len: usize) -> &str {
    if s.len() <= len {
        return s;
    }
    let mut end = len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
