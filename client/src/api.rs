//! REST layer. Every operation the backend exposes, one async fn each;
//! authenticated calls carry the stored bearer token.

use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use portal_shared::{
    Application, ApplicationStatus, ApplicationsResponse, Collection, DashboardStats, Position,
    ReviewRequest, Role, SubmitApplication, User, UsersResponse,
};

use crate::session;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = authorized(Request::get(url))
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<T>().await.map_err(|e| format!("parse error: {e}"))
}

/// Send a JSON-bodied request, keeping the backend's `error` message when it
/// provides one.
async fn send_json<B: serde::Serialize>(builder: RequestBuilder, body: &B) -> Result<(), String> {
    let resp = authorized(builder)
        .json(body)
        .map_err(|e| format!("fetch error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if resp.ok() {
        return Ok(());
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        error: String,
    }
    if let Ok(body) = resp.json::<ErrorBody>().await
        && !body.error.is_empty()
    {
        return Err(body.error);
    }
    Err(format!("HTTP {}", resp.status()))
}

/// Build a query string from optional parameters, skipping absent/empty ones.
pub(crate) fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        let Some(value) = value else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        out.push(if out.is_empty() { '?' } else { '&' });
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

#[derive(Debug, Clone, Deserialize)]
struct AuthUrlResponse {
    url: String,
}

/// Ask the backend for the Discord OAuth redirect URL.
pub async fn fetch_discord_auth_url() -> Result<String, String> {
    let resp: AuthUrlResponse = get_json("/api/auth/discord/url").await?;
    Ok(resp.url)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthCallbackResponse {
    pub token: String,
    pub user: User,
}

/// Exchange a Discord authorization code for a session token + user record.
pub async fn exchange_discord_code(code: &str) -> Result<AuthCallbackResponse, String> {
    let resp = Request::post("/api/auth/discord/callback")
        .json(&serde_json::json!({ "code": code }))
        .map_err(|e| format!("fetch error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            message: String,
        }
        if let Ok(body) = resp.json::<ErrorBody>().await
            && !body.message.is_empty()
        {
            return Err(body.message);
        }
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<AuthCallbackResponse>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

pub async fn submit_application(
    position: Position,
    form_data: Map<String, Value>,
) -> Result<(), String> {
    let body = SubmitApplication { position, form_data };
    send_json(Request::post("/api/applications/submit"), &body).await
}

/// The current user's applications. The backend returns a bare array here.
pub async fn fetch_my_applications() -> Result<Vec<Application>, String> {
    get_json("/api/applications/my-applications").await
}

pub async fn fetch_all_applications(
    status: Option<ApplicationStatus>,
    position: Option<Position>,
    limit: Option<u32>,
) -> Result<ApplicationsResponse, String> {
    let query = query_string(&[
        ("status", status.map(|s| s.as_str().to_string())),
        ("position", position.map(|p| p.as_str().to_string())),
        ("limit", limit.map(|l| l.to_string())),
    ]);
    get_json(&format!("/api/applications/all{query}")).await
}

pub async fn review_application(
    id: &str,
    status: ApplicationStatus,
    notes: &str,
) -> Result<(), String> {
    let body = ReviewRequest { status, notes: notes.to_string() };
    send_json(Request::put(&format!("/api/applications/{id}/review")), &body).await
}

pub async fn fetch_users(
    page: Option<u32>,
    limit: Option<u32>,
    role: Option<Role>,
) -> Result<UsersResponse, String> {
    let query = query_string(&[
        ("page", page.map(|p| p.to_string())),
        ("limit", limit.map(|l| l.to_string())),
        ("role", role.map(|r| r.as_str().to_string())),
    ]);
    get_json(&format!("/api/admin/users{query}")).await
}

pub async fn update_user_role(id: &str, role: Role) -> Result<(), String> {
    send_json(
        Request::put(&format!("/api/admin/users/{id}/role")),
        &serde_json::json!({ "role": role }),
    )
    .await
}

pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    get_json("/api/admin/dashboard/stats").await
}

/// Raw documents of one collection for the database browser.
pub async fn fetch_collection(collection: Collection, limit: u32) -> Result<Vec<Value>, String> {
    let (url, array_key) = match collection {
        Collection::Users => (format!("/api/admin/users?limit={limit}"), "users"),
        Collection::Applications => {
            (format!("/api/applications/all?limit={limit}"), "applications")
        }
        Collection::AuditLogs => (format!("/api/admin/audit-logs?limit={limit}"), "logs"),
    };
    let body: Value = get_json(&url).await?;
    match body.get(array_key).and_then(Value::as_array) {
        Some(docs) => Ok(docs.clone()),
        None => Ok(Vec::new()),
    }
}

/// Overwrite one backend document verbatim. No schema validation on purpose:
/// this is the admin escape hatch.
pub async fn update_document(collection: Collection, id: &str, doc: &Value) -> Result<(), String> {
    send_json(
        Request::put(&format!("/api/admin/db/update/{}/{id}", collection.as_str())),
        doc,
    )
    .await
}

pub async fn delete_document(collection: Collection, id: &str) -> Result<(), String> {
    let resp = authorized(Request::delete(&format!(
        "/api/admin/db/delete/{}/{id}",
        collection.as_str()
    )))
    .send()
    .await
    .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::query_string;

    #[test]
    fn query_string_skips_absent_and_empty_values() {
        assert_eq!(query_string(&[("status", None), ("position", None)]), "");
        assert_eq!(
            query_string(&[
                ("status", Some("pending".to_string())),
                ("position", None),
                ("limit", Some("20".to_string())),
            ]),
            "?status=pending&limit=20"
        );
        assert_eq!(query_string(&[("role", Some(String::new()))]), "");
    }
}
