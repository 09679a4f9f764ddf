// Hand-crafted async HTTP client for the Curio admin API.
//
// Base path: /admin/
// Auth: `Authorization: Bearer <token>` header

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{Envelope, ErrorBody, ListData, ReorderRequest, StatsData};

/// Async client for the Curio admin API.
///
/// Resource-agnostic by design: every verb takes the resource endpoint
/// (`"banners"`, `"drops"`, ...) as a parameter, so the sync core can be
/// generic over entity types without this crate knowing about them.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AdminClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization: Bearer <token>` as a default header on
    /// every request.
    pub fn from_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!(
            "Bearer {}",
            token.expose_secret()
        ))
        .map_err(|e| Error::Unauthorized {
            message: format!("invalid token header value: {e}"),
        })?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL with the `/admin/` prefix appended unless the
    /// caller already supplied it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/admin") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/admin/"));
        }

        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"banners"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/admin/`, so joining `banners` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn patch_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path);
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str::<Envelope<T>>(&body)
                .map(|envelope| envelope.data)
                .map_err(|e| {
                    let preview = &body[..body.len().min(200)];
                    Error::Deserialization {
                        message: format!("{e} (body preview: {preview:?})"),
                        body,
                    }
                })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&raw)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw.clone()
                }
            });

        match status {
            reqwest::StatusCode::UNAUTHORIZED => Error::Unauthorized { message },
            reqwest::StatusCode::NOT_FOUND => Error::NotFound { message },
            reqwest::StatusCode::BAD_REQUEST | reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
                Error::Validation { message }
            }
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET /admin/{endpoint}?{filters}&page=&limit=` — one page of items.
    ///
    /// `filters` are already-flattened key/value pairs; `page` and `limit`
    /// are appended last so a stray `page` filter key cannot shadow them.
    pub async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        filters: &[(String, String)],
        page: u32,
        limit: u32,
    ) -> Result<ListData<T>, Error> {
        let mut params: Vec<(&str, String)> = filters
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();
        params.push(("page", page.to_string()));
        params.push(("limit", limit.to_string()));

        self.get(endpoint, &params).await
    }

    /// `GET /admin/{endpoint}/stats` — resource-wide aggregates.
    pub async fn stats(&self, endpoint: &str) -> Result<StatsData, Error> {
        self.get(&format!("{endpoint}/stats"), &[]).await
    }

    /// `POST /admin/{endpoint}` — create an entity.
    pub async fn create<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<T, Error> {
        self.post(endpoint, payload).await
    }

    /// `PATCH /admin/{endpoint}/{id}` — partial update.
    pub async fn update<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        id: &str,
        payload: &B,
    ) -> Result<T, Error> {
        self.patch(&format!("{endpoint}/{id}"), payload).await
    }

    /// `PATCH /admin/{endpoint}/{id}/status` — flip the entity's status
    /// field (active/inactive, paused/active, ...). The server owns the
    /// flip semantics; the response carries the updated entity.
    pub async fn toggle_status<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: &str,
    ) -> Result<T, Error> {
        self.patch(&format!("{endpoint}/{id}/status"), &serde_json::json!({}))
            .await
    }

    /// `PATCH /admin/{endpoint}/reorder` — batched id→position commit.
    pub async fn reorder(&self, endpoint: &str, body: &ReorderRequest) -> Result<(), Error> {
        self.patch_no_response(&format!("{endpoint}/reorder"), body)
            .await
    }

    /// `DELETE /admin/{endpoint}/{id}`.
    pub async fn remove(&self, endpoint: &str, id: &str) -> Result<(), Error> {
        self.delete(&format!("{endpoint}/{id}")).await
    }
}
