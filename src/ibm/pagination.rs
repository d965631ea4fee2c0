//! Continuation-marker pagination
//!
//! The walk is written against [`PageSource`] so it can run over a fake
//! source in tests; [`RestPager`] is the HTTP implementation used by
//! [`CloudClient::list_all`].

use futures::future::BoxFuture;
use futures::FutureExt;
use log::debug;
use serde_json::Value;
use std::collections::HashSet;

use crate::config::api;
use crate::error::{CloudError, Result};
use crate::ibm::client::CloudClient;
use crate::ibm::record::{Collection, Record};
use crate::ibm::resources::ResourceKind;

/// One page of records plus the marker for the next one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    /// `None` ends the listing
    pub next: Option<String>,
}

impl Page {
    /// Last page
    pub fn last(records: Vec<Record>) -> Self {
        Self {
            records,
            next: None,
        }
    }

    /// Page followed by the page at `marker`
    pub fn with_next(records: Vec<Record>, marker: &str) -> Self {
        Self {
            records,
            next: Some(marker.to_string()),
        }
    }
}

/// Anything that can fetch one page given the previous page's marker
pub trait PageSource {
    /// Fetch the page at `marker` (`None` for the first page)
    fn fetch_page<'a>(&'a self, marker: Option<&'a str>) -> BoxFuture<'a, Result<Page>>;

    /// Label for logs and error messages
    fn describe(&self) -> String {
        "resources".to_string()
    }
}

/// Fetch every page from `source`, one request at a time, concatenating
/// records in the order received
///
/// Fails with `Pagination` when a marker repeats, which would otherwise loop
/// forever.
pub async fn walk_pages<S>(source: &S) -> Result<Collection>
where
    S: PageSource + ?Sized,
{
    let mut all_records: Collection = Vec::new();
    let mut seen_markers: HashSet<String> = HashSet::new();
    let mut marker: Option<String> = None;
    let mut page_num: u32 = 0;

    loop {
        page_num += 1;
        let page = source.fetch_page(marker.as_deref()).await?;
        debug!(
            "Page {} of {} returned {} records",
            page_num,
            source.describe(),
            page.records.len()
        );
        all_records.extend(page.records);

        let Some(next) = page.next else {
            break;
        };

        if !seen_markers.insert(next.clone()) {
            return Err(CloudError::Pagination(format!(
                "server repeated continuation marker '{}' on page {} of {}",
                next,
                page_num,
                source.describe()
            )));
        }
        marker = Some(next);
    }

    debug!(
        "Fetched {} total records for {} in {} page(s)",
        all_records.len(),
        source.describe(),
        page_num
    );
    Ok(all_records)
}

/// Extract the continuation marker from a list response body
///
/// Handles the three shapes IBM services use for `next`:
/// - `{"start": "..."}` (Code Engine)
/// - `{"href": "https://...?start=..."}` (VPC)
/// - `"https://...?pagetoken=..."` (IAM Identity)
///
/// Empty markers are treated as absent.
pub fn next_marker(body: &Value, marker_param: &str) -> Option<String> {
    let marker = match &body["next"] {
        Value::Object(next) => next
            .get("start")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                next.get("href")
                    .and_then(Value::as_str)
                    .and_then(|href| query_param(href, marker_param))
            }),
        Value::String(href) => query_param(href, marker_param),
        _ => None,
    };
    marker.filter(|m| !m.is_empty())
}

/// Decoded value of query parameter `name` in `url`
fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or("");
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|v| v.into_owned())
}

/// HTTP page source for one resource kind
pub struct RestPager<'a> {
    client: &'a CloudClient,
    kind: &'a ResourceKind,
    page_size: u32,
}

impl<'a> RestPager<'a> {
    /// Page source over `kind`, with `page_size` clamped to the service limit
    pub fn new(client: &'a CloudClient, kind: &'a ResourceKind, page_size: Option<u32>) -> Self {
        Self {
            client,
            kind,
            page_size: clamp_page_size(page_size),
        }
    }

    fn page_url(&self, marker: Option<&str>) -> String {
        let mut query = self.kind.fixed_query();
        query.push((self.kind.page_size_param(), self.page_size.to_string()));
        if let Some(m) = marker {
            query.push((self.kind.marker_param(), m.to_string()));
        }
        self.client.url(&self.kind.path(), &query)
    }

    async fn fetch(&self, marker: Option<&str>) -> Result<Page> {
        let url = self.page_url(marker);
        let body: Value = self.client.get_json(&url, &self.kind.to_string()).await?;

        let records = match &body[self.kind.collection_key()] {
            Value::Array(items) => items
                .iter()
                .cloned()
                .map(|item| {
                    Record::from_value(item).ok_or_else(|| {
                        CloudError::Json(format!(
                            "Unexpected non-object entry in '{}' list",
                            self.kind.collection_key()
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Value::Null => {
                debug!(
                    "Response for {} has no '{}' array, treating as empty",
                    self.kind,
                    self.kind.collection_key()
                );
                Vec::new()
            }
            _ => {
                return Err(CloudError::Json(format!(
                    "Field '{}' is not an array",
                    self.kind.collection_key()
                )))
            }
        };

        Ok(Page {
            records,
            next: next_marker(&body, self.kind.marker_param()),
        })
    }
}

impl PageSource for RestPager<'_> {
    fn fetch_page<'b>(&'b self, marker: Option<&'b str>) -> BoxFuture<'b, Result<Page>> {
        self.fetch(marker).boxed()
    }

    fn describe(&self) -> String {
        self.kind.to_string()
    }
}

/// Page size hint clamped to `1..=MAX_PAGE_SIZE`
pub fn clamp_page_size(page_size: Option<u32>) -> u32 {
    page_size
        .unwrap_or(api::DEFAULT_PAGE_SIZE)
        .clamp(1, api::MAX_PAGE_SIZE)
}

impl CloudClient {
    /// Fetch the complete collection for `kind`
    pub async fn list_all(&self, kind: &ResourceKind, page_size: Option<u32>) -> Result<Collection> {
        if kind.service() != self.service() {
            return Err(CloudError::Config(format!(
                "cannot list {} with a client bound to {}",
                kind,
                self.service()
            )));
        }
        walk_pages(&RestPager::new(self, kind, page_size)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ibm::client::mount_token_endpoint;
    use crate::ibm::service::Service;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{method, path, query_param as q, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Serves pre-built pages keyed by marker
    struct FakeSource {
        pages: Vec<(Option<&'static str>, Page)>,
        calls: AtomicUsize,
    }

    impl PageSource for FakeSource {
        fn fetch_page<'a>(&'a self, marker: Option<&'a str>) -> BoxFuture<'a, Result<Page>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let page = self
                .pages
                .iter()
                .find(|(m, _)| *m == marker)
                .map(|(_, p)| p.clone())
                .ok_or_else(|| CloudError::Api {
                    status: 400,
                    message: format!("unknown marker {:?}", marker),
                });
            async move { page }.boxed()
        }
    }

    fn records(prefix: &str, n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::from_value(json!({"id": format!("{}-{}", prefix, i)})).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_walk_three_pages() {
        let source = FakeSource {
            pages: vec![
                (None, Page::with_next(records("a", 40), "m1")),
                (Some("m1"), Page::with_next(records("b", 40), "m2")),
                (Some("m2"), Page::last(records("c", 5))),
            ],
            calls: AtomicUsize::new(0),
        };

        let all = walk_pages(&source).await.unwrap();
        assert_eq!(all.len(), 85);
        assert_eq!(all[0].id(), "a-0");
        assert_eq!(all[40].id(), "b-0");
        assert_eq!(all[84].id(), "c-4");
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_walk_empty_collection() {
        let source = FakeSource {
            pages: vec![(None, Page::last(Vec::new()))],
            calls: AtomicUsize::new(0),
        };
        assert!(walk_pages(&source).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_walk_repeated_marker_fails() {
        let source = FakeSource {
            pages: vec![
                (None, Page::with_next(records("a", 2), "loop")),
                (Some("loop"), Page::with_next(records("b", 2), "loop")),
            ],
            calls: AtomicUsize::new(0),
        };

        match walk_pages(&source).await.unwrap_err() {
            CloudError::Pagination(msg) => assert!(msg.contains("loop")),
            other => panic!("Expected CloudError::Pagination, got {:?}", other),
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_walk_propagates_page_error() {
        let source = FakeSource {
            pages: vec![(None, Page::with_next(records("a", 1), "missing"))],
            calls: AtomicUsize::new(0),
        };
        assert!(matches!(
            walk_pages(&source).await,
            Err(CloudError::Api { status: 400, .. })
        ));
    }

    #[test]
    fn test_next_marker_start_field() {
        let body = json!({"next": {"href": "https://x/v2/projects?start=abc", "start": "abc"}});
        assert_eq!(next_marker(&body, "start"), Some("abc".to_string()));
    }

    #[test]
    fn test_next_marker_from_href() {
        let body = json!({"next": {"href": "https://x/v1/vpcs?limit=50&start=r006%2Fxyz&version=2024-04-30"}});
        assert_eq!(next_marker(&body, "start"), Some("r006/xyz".to_string()));
    }

    #[test]
    fn test_next_marker_from_url_string() {
        let body = json!({"next": "https://iam.cloud.ibm.com/v1/serviceids?pagetoken=tok123&pagesize=100"});
        assert_eq!(next_marker(&body, "pagetoken"), Some("tok123".to_string()));
    }

    #[test]
    fn test_next_marker_absent_or_empty() {
        assert_eq!(next_marker(&json!({}), "start"), None);
        assert_eq!(next_marker(&json!({"next": null}), "start"), None);
        assert_eq!(next_marker(&json!({"next": {"start": ""}}), "start"), None);
        assert_eq!(
            next_marker(&json!({"next": {"href": "https://x/v1/vpcs?limit=5"}}), "start"),
            None
        );
    }

    #[test]
    fn test_clamp_page_size() {
        assert_eq!(clamp_page_size(None), 100);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(25)), 25);
        assert_eq!(clamp_page_size(Some(5000)), 100);
    }

    #[tokio::test]
    async fn test_list_all_code_engine_pages() {
        let mock_server = MockServer::start().await;
        mount_token_endpoint(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(q("start", "page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "limit": 2,
                "projects": [{"id": "p3", "name": "three"}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(q("limit", "2"))
            .and(query_param_is_missing("start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "limit": 2,
                "projects": [{"id": "p1", "name": "one"}, {"id": "p2", "name": "two"}],
                "next": {"href": "https://api/v2/projects?limit=2&start=page2", "start": "page2"}
            })))
            .mount(&mock_server)
            .await;

        let client = CloudClient::test_client(&mock_server.uri(), Service::CodeEngine);
        let projects = client
            .list_all(&ResourceKind::Projects, Some(2))
            .await
            .unwrap();

        let ids: Vec<&str> = projects.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_list_all_wrong_service_is_config_error() {
        let client = CloudClient::test_client("http://127.0.0.1:1", Service::Vpc);
        let result = client.list_all(&ResourceKind::Projects, None).await;
        assert!(matches!(result, Err(CloudError::Config(_))));
    }

    #[tokio::test]
    async fn test_list_all_non_array_collection() {
        let mock_server = MockServer::start().await;
        mount_token_endpoint(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/vpcs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vpcs": "oops"})))
            .mount(&mock_server)
            .await;

        let client = CloudClient::test_client(&mock_server.uri(), Service::Vpc);
        assert!(matches!(
            client.list_all(&ResourceKind::Vpcs, None).await,
            Err(CloudError::Json(_))
        ));
    }
}
