use adk_docs_crawler::config::CrawlerConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Host of a wiremock server URI, e.g. "127.0.0.1"
pub fn mock_host(server: &MockServer) -> String {
    url::Url::parse(&server.uri())
        .expect("Failed to parse mock server URI")
        .host_str()
        .expect("Mock server URI has no host")
        .to_string()
}

/// Crawler configuration scoped to `/adk/` on the mock server, without rate limiting
pub fn crawler_config(server: &MockServer, max_pages: usize) -> CrawlerConfig {
    CrawlerConfig {
        base_url: format!("{}/adk/", server.uri()),
        allowed_domains: vec![mock_host(server)],
        allowed_paths: vec!["/adk/".to_string()],
        user_agent: "TestBot/1.0".to_string(),
        rate_limit_seconds: 0.0,
        timeout_seconds: 5.0,
        respect_robots_txt: true,
        max_pages,
    }
}

pub fn html_page(title: &str, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(
            "<html><head><title>{}</title></head><body>{}</body></html>",
            title, body
        ),
        "text/html; charset=utf-8",
    )
}

/// Mounts a GET route serving an HTML page, expecting exactly `hits` requests
pub async fn mount_page(server: &MockServer, route: &str, title: &str, body: &str, hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_page(title, body))
        .expect(hits)
        .mount(server)
        .await;
}

pub async fn mount_robots(server: &MockServer, content: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(server)
        .await;
}
