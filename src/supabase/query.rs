use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::SupabaseClient;
use crate::error::{PostgrestErrorBody, SiteError};

/// Sort direction for [`TableQuery::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// One request against a table, built up with PostgREST query parameters.
#[derive(Debug, Clone)]
pub struct TableQuery {
    client: SupabaseClient,
    table: String,
    params: Vec<(String, String)>,
    has_filter: bool,
}

impl TableQuery {
    pub(super) fn new(client: SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            params: Vec::new(),
            has_filter: false,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// `column = value`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self.has_filter = true;
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.{}", order.as_str())));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    fn url(&self) -> Result<Url, SiteError> {
        let mut url = self.client.table_url(&self.table)?;
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        Ok(url)
    }

    /// Rows that deserialize as `T`; the whole call fails on the first bad row.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, SiteError> {
        let resp = self.send(Method::GET, None::<&()>, None).await?;
        Ok(resp.json::<Vec<T>>().await?)
    }

    /// Rows that deserialize as `T`; rows that don't are skipped and counted.
    pub async fn fetch_lenient<T: DeserializeOwned>(self) -> Result<Vec<T>, SiteError> {
        let table = self.table.clone();
        let rows: Vec<Value> = self.fetch().await?;
        let total = rows.len();
        let parsed: Vec<T> = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect();
        if parsed.len() < total {
            warn!(
                table = %table,
                skipped = total - parsed.len(),
                "Skipped rows that do not match the expected shape"
            );
        }
        Ok(parsed)
    }

    /// At most one row; `None` when nothing matches.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, SiteError> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// PATCH every row matching the filters. Refuses to run without a filter.
    pub async fn update<B: Serialize>(self, body: &B) -> Result<(), SiteError> {
        self.require_filter("update")?;
        self.send(Method::PATCH, Some(body), Some("return=minimal"))
            .await?;
        Ok(())
    }

    /// Insert or merge on `on_conflict`.
    pub async fn upsert<B: Serialize>(
        mut self,
        body: &B,
        on_conflict: &str,
    ) -> Result<(), SiteError> {
        self.params
            .push(("on_conflict".to_string(), on_conflict.to_string()));
        self.send(
            Method::POST,
            Some(body),
            Some("resolution=merge-duplicates,return=minimal"),
        )
        .await?;
        Ok(())
    }

    pub async fn insert<B: Serialize>(self, body: &B) -> Result<(), SiteError> {
        self.send(Method::POST, Some(body), Some("return=minimal"))
            .await?;
        Ok(())
    }

    /// DELETE every row matching the filters. Refuses to run without a filter.
    pub async fn delete(self) -> Result<(), SiteError> {
        self.require_filter("delete")?;
        self.send(Method::DELETE, None::<&()>, Some("return=minimal"))
            .await?;
        Ok(())
    }

    fn require_filter(&self, action: &str) -> Result<(), SiteError> {
        if self.has_filter {
            Ok(())
        } else {
            Err(SiteError::BadRequest(format!(
                "refusing to {action} every row of {}",
                self.table
            )))
        }
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        body: Option<&B>,
        prefer: Option<&'static str>,
    ) -> Result<reqwest::Response, SiteError> {
        let url = self.url()?;
        let mut headers: HeaderMap = self.client.headers();
        if let Some(prefer) = prefer {
            headers.insert("prefer", HeaderValue::from_static(prefer));
        }

        debug!(table = %self.table, method = %method, url = %url, "PostgREST request");

        let mut request = self.client.http().request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = request.send().await?;

        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let raw = resp.bytes().await.unwrap_or_default();
        let body = PostgrestErrorBody::from_body(&raw);
        Err(SiteError::Postgrest {
            table: self.table.clone(),
            status,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SupabaseConfig;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server) -> SupabaseClient {
        let cfg = SupabaseConfig {
            url: Some(Url::parse(&server.url()).expect("mock url")),
            anon_key: "anon-key".to_string(),
            ..Default::default()
        };
        SupabaseClient::from_config(&cfg).expect("client should build")
    }

    #[tokio::test]
    async fn select_sends_filters_order_and_key() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/rest/v1/agent_buffer")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("status".into(), "eq.approved".into()),
                Matcher::UrlEncoded("order".into(), "found_at.desc".into()),
            ]))
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer anon-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([{ "id": 1 }, { "id": 2 }]).to_string())
            .create_async()
            .await;

        let rows: Vec<Value> = client_for(&server)
            .table("agent_buffer")
            .select("*")
            .eq("status", "approved")
            .order("found_at", Order::Descending)
            .fetch()
            .await
            .expect("fetch should succeed");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn error_status_carries_postgrest_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/rest/v1/productos")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":"42P01","message":"relation does not exist"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .table("productos")
            .select("*")
            .fetch::<Value>()
            .await
            .expect_err("404 should surface as an error");
        match err {
            SiteError::Postgrest { table, status, body } => {
                assert_eq!(table, "productos");
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body.code.as_deref(), Some("42P01"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_without_filter_is_refused_locally() {
        let server = Server::new_async().await;
        let err = client_for(&server)
            .table("productos")
            .update(&json!({ "nombre": "x" }))
            .await
            .expect_err("unfiltered update must be refused");
        assert!(matches!(err, SiteError::BadRequest(_)));
    }

    #[tokio::test]
    async fn upsert_posts_on_conflict_and_merge_preference() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/rest/v1/web_contenido")
            .match_query(Matcher::UrlEncoded("on_conflict".into(), "section".into()))
            .match_header("prefer", "resolution=merge-duplicates,return=minimal")
            .match_body(Matcher::PartialJson(json!({ "section": "hero" })))
            .with_status(201)
            .create_async()
            .await;

        client_for(&server)
            .table("web_contenido")
            .upsert(&json!({ "section": "hero", "content": {} }), "section")
            .await
            .expect("upsert should succeed");
        m.assert_async().await;
    }
}
