//! Remote contents-API adapter
//!
//! Full CRUD against the git hosting service's REST contents API. Every
//! document is a file at `<category-dir>/<id>.json` inside the configured
//! repository; the service's content hash (`sha`) is the revision marker.
//!
//! Concurrent-edit detection works without a lock server: each write and
//! delete supplies the caller's last-known marker as a precondition, and the
//! service rejects the call when the live marker differs. That rejection
//! surfaces as [`Error::Conflict`].

use crate::backend::{ContentBackend, RawDocument, RawEntry};
use crate::error::{Error, Result};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use cms_content::Category;
use reqwest::{StatusCode, header};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_API_ROOT: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "cms-manager";

/// Connection settings for the remote content repository.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repository: String,

    /// Branch to read and write; the service default branch when `None`.
    pub branch: Option<String>,

    /// Bearer credential, supplied by the caller. Never persisted or
    /// refreshed by this layer.
    pub token: String,

    /// API root; override for self-hosted installations.
    pub api_root: String,
}

impl RemoteConfig {
    pub fn new(
        owner: impl Into<String>,
        repository: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            branch: None,
            token: token.into(),
            api_root: DEFAULT_API_ROOT.to_string(),
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// One entry in a contents-API response (file read or directory listing).
#[derive(Debug, Deserialize)]
struct ContentsEntry {
    name: String,
    path: String,
    sha: String,
    #[serde(rename = "type")]
    kind: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    content: Option<WrittenFile>,
}

#[derive(Debug, Deserialize)]
struct WrittenFile {
    sha: String,
}

/// What kind of call produced a rejected response; drives status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Read,
    Create,
    Update,
    Delete,
}

/// Backend over the hosting service's contents API.
pub struct RemoteBackend {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteBackend {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_root, self.config.owner, self.config.repository, path
        )
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, String)> {
        let response = request
            .bearer_auth(&self.config.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        Ok((status, text))
    }
}

#[async_trait]
impl ContentBackend for RemoteBackend {
    async fn list(&self, category: Category) -> Result<Vec<RawEntry>> {
        let url = self.contents_url(category.directory());
        let mut request = self.client.get(&url);
        if let Some(branch) = &self.config.branch {
            request = request.query(&[("ref", branch.as_str())]);
        }

        let (status, text) = self.send(request).await?;
        // A category directory that was never created is an empty category.
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(classify_status(
                status,
                &text,
                category,
                category.directory(),
                CallKind::Read,
            ));
        }

        let entries: Vec<ContentsEntry> = serde_json::from_str(&text)
            .map_err(|e| Error::unavailable(format!("malformed listing response: {e}")))?;

        let mut results: Vec<RawEntry> = entries
            .into_iter()
            .filter(|e| e.kind == "file")
            .filter_map(|e| {
                let id = e.name.strip_suffix(".json")?.to_string();
                Some(RawEntry {
                    id,
                    revision: e.sha,
                    location: e.path,
                })
            })
            .collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(category = %category, count = results.len(), "listed remote documents");
        Ok(results)
    }

    async fn read(&self, category: Category, id: &str) -> Result<RawDocument> {
        let url = self.contents_url(&category.document_path(id));
        let mut request = self.client.get(&url);
        if let Some(branch) = &self.config.branch {
            request = request.query(&[("ref", branch.as_str())]);
        }

        let (status, text) = self.send(request).await?;
        if !status.is_success() {
            return Err(classify_status(status, &text, category, id, CallKind::Read));
        }

        let entry: ContentsEntry = serde_json::from_str(&text)
            .map_err(|e| Error::unavailable(format!("malformed file response: {e}")))?;
        if entry.kind != "file" {
            return Err(Error::not_found(category, id));
        }

        let body = decode_file_content(&entry)?;
        debug!(category = %category, id, revision = %entry.sha, "read remote document");
        Ok(RawDocument {
            body,
            revision: entry.sha,
        })
    }

    async fn write(
        &self,
        category: Category,
        id: &str,
        body: &Value,
        revision: Option<&str>,
    ) -> Result<String> {
        let url = self.contents_url(&category.document_path(id));
        let kind = if revision.is_some() {
            CallKind::Update
        } else {
            CallKind::Create
        };
        let verb = match kind {
            CallKind::Create => "Create",
            _ => "Update",
        };

        let mut payload = json!({
            "message": commit_message(verb, category, id),
            "content": encode_body(body)?,
        });
        if let Some(revision) = revision {
            payload["sha"] = json!(revision);
        }
        if let Some(branch) = &self.config.branch {
            payload["branch"] = json!(branch);
        }

        let (status, text) = self.send(self.client.put(&url).json(&payload)).await?;
        if !status.is_success() {
            warn!(category = %category, id, status = status.as_u16(), "remote write rejected");
            return Err(classify_status(status, &text, category, id, kind));
        }

        let response: WriteResponse = serde_json::from_str(&text)
            .map_err(|e| Error::unavailable(format!("malformed write response: {e}")))?;
        let sha = response
            .content
            .map(|c| c.sha)
            .ok_or_else(|| Error::unavailable("write response missing content sha"))?;

        debug!(category = %category, id, revision = %sha, "wrote remote document");
        Ok(sha)
    }

    async fn delete(&self, category: Category, id: &str, revision: &str) -> Result<()> {
        let url = self.contents_url(&category.document_path(id));
        let mut payload = json!({
            "message": commit_message("Delete", category, id),
            "sha": revision,
        });
        if let Some(branch) = &self.config.branch {
            payload["branch"] = json!(branch);
        }

        let (status, text) = self.send(self.client.delete(&url).json(&payload)).await?;
        if !status.is_success() {
            warn!(category = %category, id, status = status.as_u16(), "remote delete rejected");
            return Err(classify_status(
                status,
                &text,
                category,
                id,
                CallKind::Delete,
            ));
        }

        debug!(category = %category, id, "deleted remote document");
        Ok(())
    }
}

/// Commit message for a mutating contents-API call.
fn commit_message(verb: &str, category: Category, id: &str) -> String {
    format!("{verb} {}", category.document_path(id))
}

/// Serialize and base64-encode a document body for upload.
fn encode_body(body: &Value) -> Result<String> {
    let mut serialized = serde_json::to_string_pretty(body)?;
    serialized.push('\n');
    Ok(BASE64.encode(serialized.as_bytes()))
}

/// Decode a file entry's base64 content into a JSON body.
///
/// The service wraps base64 payloads at 60 columns, so whitespace is
/// stripped before decoding. A file entry without content (oversized blobs)
/// or with undecodable content is a malformed response.
fn decode_file_content(entry: &ContentsEntry) -> Result<Value> {
    let encoded: String = entry
        .content
        .as_deref()
        .ok_or_else(|| Error::unavailable(format!("no inline content for {}", entry.path)))?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = BASE64
        .decode(encoded.as_bytes())
        .map_err(|e| Error::unavailable(format!("undecodable content for {}: {e}", entry.path)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::unavailable(format!("non-UTF-8 content for {}: {e}", entry.path)))?;

    Ok(serde_json::from_str(&text)?)
}

/// Map a transport-level failure. Timeouts, connection errors and unreadable
/// responses are all transient from the caller's perspective.
fn transport_error(e: reqwest::Error) -> Error {
    let reason = if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        format!("transport error: {e}")
    };
    Error::unavailable(reason)
}

/// Map a non-success HTTP status onto the error taxonomy.
///
/// `409` is the service's precondition-failure status; `422` doubles as
/// "sha mismatch" on conditional calls and "sha required" when creating over
/// an existing file. `5xx` is transient. Anything else in the 4xx range is
/// reported as-is and never retried automatically.
fn classify_status(
    status: StatusCode,
    body_text: &str,
    category: Category,
    id: &str,
    kind: CallKind,
) -> Error {
    if status.is_server_error() {
        return Error::unavailable(format!("service error (HTTP {})", status.as_u16()));
    }

    match (status.as_u16(), kind) {
        (404, _) => Error::not_found(category, id),
        (409, _) => Error::conflict(category, id),
        (422, CallKind::Create) => Error::AlreadyExists {
            category,
            id: id.to_string(),
        },
        (422, CallKind::Update | CallKind::Delete) => Error::conflict(category, id),
        _ => Error::Rejected {
            status: status.as_u16(),
            message: extract_api_message(body_text),
        },
    }
}

/// Pull the service's human-readable message out of an error response body.
fn extract_api_message(body_text: &str) -> String {
    serde_json::from_str::<Value>(body_text)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body_text.trim();
            if trimmed.chars().count() > 200 {
                format!("{}…", trimmed.chars().take(200).collect::<String>())
            } else {
                trimmed.to_string()
            }
        })
}
