//! Client state, configuration, and the generic request dispatcher.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{ApiError, ApiResponse, ApiResult};
use crate::models::user::UserInfo;
use crate::query;

/// Default server address, the platform's internal reverse proxy.
pub const DEFAULT_SERVER: &str = "http://nginx";

const USER_AGENT: &str = "DooTask-Rust-Client/1.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Connection settings for a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server: String,
    pub token: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }
}

/// Per-call extras layered on top of the standard auth headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

struct CachedUser {
    user: UserInfo,
    expires_at: Instant,
}

/// Asynchronous DooTask API client.
///
/// One instance per credential. The client holds the token, the server
/// address, the per-call timeout, and a TTL-bounded cache of the caller's
/// own profile. Endpoint methods live on the `api::*Api` traits.
pub struct Client {
    server: String,
    token: String,
    timeout: Duration,
    cache_ttl: Duration,
    http_client: reqwest::Client,
    cache: RwLock<HashMap<String, CachedUser>>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            server: config.server.trim_end_matches('/').to_string(),
            token: config.token,
            timeout: config.timeout,
            cache_ttl: config.cache_ttl,
            http_client: reqwest::Client::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn set_cache_ttl(&mut self, cache_ttl: Duration) {
        self.cache_ttl = cache_ttl;
    }

    /// Drop every cached profile.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    /// Number of cached profiles (one per credential ever used).
    pub async fn cache_size(&self) -> usize {
        self.cache.read().await.len()
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.server, path)
    }

    /// Issue the call and unwrap the envelope, returning the raw payload.
    ///
    /// GET and DELETE place the request value in the query string; POST, PUT
    /// and PATCH serialize it wholesale as a JSON body. The `Content-Type`
    /// header is only set when a body is present.
    async fn dispatch<Q>(
        &self,
        method: Method,
        path: &str,
        request: Option<&Q>,
        options: RequestOptions,
    ) -> ApiResult<Value>
    where
        Q: Serialize + ?Sized,
    {
        let query_placement = method == Method::GET || method == Method::DELETE;

        let mut url = self.build_url(path);
        let mut builder = if query_placement {
            if let Some(request) = request {
                let params = query::to_params(request);
                if !params.is_empty() {
                    url = query::append_query(&url, &params);
                }
            }
            self.http_client.request(method.clone(), &url)
        } else {
            let mut builder = self.http_client.request(method.clone(), &url);
            if let Some(request) = request {
                builder = builder.json(request);
            }
            builder
        };

        builder = builder
            .timeout(self.timeout)
            .header("Token", &self.token)
            .header("User-Agent", USER_AGENT);
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }

        tracing::debug!(target: "dootask_api", method = %method, url = %url, "dispatching request");

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiResponse<Option<Value>> =
            serde_json::from_str(&body).map_err(ApiError::Parse)?;

        if envelope.ret != 1 {
            tracing::debug!(target: "dootask_api", ret = envelope.ret, "server rejected request");
            return Err(ApiError::from_envelope(envelope.ret, envelope.msg));
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }

    /// Dispatch and decode the payload into `T`.
    pub(crate) async fn request<Q, T>(
        &self,
        method: Method,
        path: &str,
        request: Option<&Q>,
        options: RequestOptions,
    ) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self.dispatch(method, path, request, options).await?;
        serde_json::from_value(data).map_err(ApiError::Decode)
    }

    /// Dispatch for callers that only care about envelope success.
    pub(crate) async fn request_empty<Q>(
        &self,
        method: Method,
        path: &str,
        request: Option<&Q>,
        options: RequestOptions,
    ) -> ApiResult<()>
    where
        Q: Serialize + ?Sized,
    {
        self.dispatch(method, path, request, options).await?;
        Ok(())
    }

    pub(crate) async fn get<Q, T>(&self, path: &str, params: Option<&Q>) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, params, RequestOptions::new())
            .await
    }

    pub(crate) async fn get_empty<Q>(&self, path: &str, params: Option<&Q>) -> ApiResult<()>
    where
        Q: Serialize + ?Sized,
    {
        self.request_empty(Method::GET, path, params, RequestOptions::new())
            .await
    }

    pub(crate) async fn post<Q, T>(&self, path: &str, body: Option<&Q>) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, body, RequestOptions::new())
            .await
    }

    pub(crate) async fn post_empty<Q>(&self, path: &str, body: Option<&Q>) -> ApiResult<()>
    where
        Q: Serialize + ?Sized,
    {
        self.request_empty(Method::POST, path, body, RequestOptions::new())
            .await
    }
}

// Profile cache. Entries are created lazily on fetch, replaced on refetch,
// and removed when read after their deadline; there is no background sweep.
impl Client {
    /// Cached profile for the current credential, if still fresh.
    pub(crate) async fn cached_user(&self) -> Option<UserInfo> {
        let cache = self.cache.read().await;
        let entry = cache.get(&self.token)?;
        if Instant::now() < entry.expires_at {
            Some(entry.user.clone())
        } else {
            None
        }
    }

    pub(crate) async fn evict_user(&self) {
        self.cache.write().await.remove(&self.token);
    }

    pub(crate) async fn store_user(&self, user: UserInfo) {
        let entry = CachedUser {
            user,
            expires_at: Instant::now() + self.cache_ttl,
        };
        self.cache.write().await.insert(self.token.clone(), entry);
    }
}
