//! Crawl cycle tests against mock documentation sites

use crate::common::{crawler_config, mount_page, mount_robots};
use adk_docs_crawler::crawler::{crawl, doc_id_for, Crawler};
use adk_docs_crawler::robots::fetch_robots;
use adk_docs_crawler::state::UrlState;
use adk_docs_crawler::url::CrawlScope;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_crawl_stays_in_scope() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/adk/",
        "Home",
        &format!(
            r#"<a href="/adk/a">A</a>
            <a href="{base}/other/page">Other</a>
            <a href="https://elsewhere.example/adk/x">External</a>
            <a href="mailto:team@example.com">Mail</a>
            <a href="/adk/a#install">A again</a>"#
        ),
        1,
    )
    .await;
    mount_page(&server, "/adk/a", "Page A", "<p>Leaf</p>", 1).await;
    mount_page(&server, "/other/page", "Other", "<p>Never</p>", 0).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");

    let urls: Vec<&str> = outcome.pages().iter().map(|p| p.url.as_str()).collect();
    assert_eq!(urls, vec![format!("{base}/adk/"), format!("{base}/adk/a")]);

    let home = &outcome.pages()[0];
    assert_eq!(home.title, "Home");
    assert_eq!(home.links, vec![format!("{base}/adk/a")]);
    assert_eq!(home.status_code, 200);
    assert_eq!(home.content_type, "text/html; charset=utf-8");
    assert_eq!(home.doc_id, doc_id_for(&home.url));
    assert!(home.raw_html.contains("<title>Home</title>"));
}

#[tokio::test]
async fn test_diamond_graph_fetches_shared_page_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/adk/",
        "A",
        r#"<a href="/adk/b">B</a><a href="/adk/c">C</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/adk/b", "B", r#"<a href="/adk/d">D</a>"#, 1).await;
    mount_page(&server, "/adk/c", "C", r#"<a href="/adk/d/">D</a>"#, 1).await;
    mount_page(&server, "/adk/d", "D", r#"<a href="/adk/">Home</a>"#, 1).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");

    let urls: Vec<String> = outcome.pages().iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{base}/adk/"),
            format!("{base}/adk/b"),
            format!("{base}/adk/c"),
            format!("{base}/adk/d"),
        ]
    );
    assert_eq!(outcome.visited_count(), 4);
}

#[tokio::test]
async fn test_robots_disallow_rejects_without_fetching() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, "User-agent: *\nDisallow: /adk/private\n").await;
    mount_page(
        &server,
        "/adk/",
        "Home",
        r#"<a href="/adk/private/keys">Private</a><a href="/adk/public">Public</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/adk/private/keys", "Private", "", 0).await;
    mount_page(&server, "/adk/public", "Public", "", 1).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");

    assert_eq!(outcome.pages().len(), 2);
    assert_eq!(
        outcome.state.state_of(&format!("{base}/adk/private/keys")),
        Some(UrlState::RejectedByRobots)
    );
    assert_eq!(
        outcome.state.state_of(&format!("{base}/adk/public")),
        Some(UrlState::Visited)
    );
    assert_eq!(outcome.visited_count(), 3);
}

#[tokio::test]
async fn test_robots_rules_match_user_agent_token() {
    let server = MockServer::start().await;

    mount_robots(&server, "User-agent: TestBot\nDisallow: /adk/\n\nUser-agent: *\nAllow: /\n").await;
    mount_page(&server, "/adk/", "Home", "", 0).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");

    assert!(outcome.pages().is_empty());
    assert_eq!(outcome.state.count(UrlState::RejectedByRobots), 1);
}

#[tokio::test]
async fn test_robots_server_error_fails_open() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/adk/", "Home", "<p>Welcome</p>", 1).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");
    assert_eq!(outcome.pages().len(), 1);
}

#[tokio::test]
async fn test_robots_network_error_fails_open() {
    // Bind then drop a listener so the port refuses connections
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);

    let client = reqwest::Client::new();
    let policy = fetch_robots(&client, &format!("http://127.0.0.1:{port}/robots.txt")).await;
    assert!(policy.allows_everything());
}

#[tokio::test]
async fn test_crawl_proceeds_when_robots_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nDisallow: /\n")
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/adk/", "Home", "<p>Welcome</p>", 1).await;

    let mut config = crawler_config(&server, 10);
    config.timeout_seconds = 0.5;

    let outcome = crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.pages().len(), 1);
    assert_eq!(outcome.pages()[0].title, "Home");
    assert_eq!(outcome.state.count(UrlState::RejectedByRobots), 0);
}

#[tokio::test]
async fn test_robots_not_fetched_when_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /\n"))
        .expect(0)
        .mount(&server)
        .await;
    mount_page(&server, "/adk/", "Home", "", 1).await;

    let mut config = crawler_config(&server, 10);
    config.respect_robots_txt = false;

    let outcome = crawl(&config).await.expect("Crawl failed");
    assert_eq!(outcome.pages().len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_is_recorded_and_crawl_continues() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/adk/",
        "Home",
        r#"<a href="/adk/missing">Missing</a><a href="/adk/ok">Ok</a>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/adk/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/adk/ok", "Ok", "", 1).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");

    assert_eq!(outcome.pages().len(), 2);
    assert_eq!(
        outcome.state.state_of(&format!("{base}/adk/missing")),
        Some(UrlState::FetchFailed)
    );
    assert_eq!(outcome.state.count(UrlState::FetchFailed), 1);
}

#[tokio::test]
async fn test_max_pages_caps_emitted_pages() {
    let server = MockServer::start().await;

    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="/adk/p{i}">P{i}</a>"#))
        .collect();
    mount_page(&server, "/adk/", "Home", &links, 1).await;
    for i in 1..=2 {
        mount_page(&server, &format!("/adk/p{i}"), "Page", "", 1).await;
    }
    for i in 3..=5 {
        mount_page(&server, &format!("/adk/p{i}"), "Page", "", 0).await;
    }

    let outcome = crawl(&crawler_config(&server, 3)).await.expect("Crawl failed");

    assert_eq!(outcome.pages().len(), 3);
    assert_eq!(outcome.state.frontier_len(), 3);
    assert_eq!(outcome.state.count(UrlState::Queued), 3);
}

#[tokio::test]
async fn test_links_resolve_against_redirect_target() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/adk/", "Home", r#"<a href="/adk/moved">Moved</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/adk/moved"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{base}/adk/new/").as_str()),
        )
        .mount(&server)
        .await;
    mount_page(&server, "/adk/new/", "New", r#"<a href="child">Child</a>"#, 1).await;
    mount_page(&server, "/adk/new/child", "Child", "", 1).await;

    let outcome = crawl(&crawler_config(&server, 10)).await.expect("Crawl failed");

    let moved = &outcome.pages()[1];
    assert_eq!(moved.url, format!("{base}/adk/moved"));
    assert_eq!(moved.title, "New");
    assert_eq!(moved.links, vec![format!("{base}/adk/new/child")]);
    assert_eq!(outcome.pages().len(), 3);
}

#[tokio::test]
async fn test_untitled_page_falls_back_to_url() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/adk/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body><p>No title here</p></body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let scope = CrawlScope::from_config(&crawler_config(&server, 10)).expect("Invalid scope");
    let mut crawler = Crawler::from_scope(scope).expect("Failed to build crawler");
    crawler.init_robots().await;
    assert!(crawler.robots().allows_everything());

    let outcome = crawler.crawl().await;
    assert_eq!(outcome.pages()[0].title, format!("{base}/adk/"));
}
