//! End-to-end pipeline tests: crawl, extract, chunk, write, upload

use crate::common::{mock_host, mount_page};
use adk_docs_crawler::config::{parse_config, Config};
use adk_docs_crawler::output::{read_jsonl, read_manifest};
use adk_docs_crawler::pipeline::{run_local_stages, run_pipeline, upload_stage};
use adk_docs_crawler::storage::Uploader;
use adk_docs_crawler::{Chunk, Document};
use object_store::memory::InMemory;
use object_store::path::Path as ObjPath;
use object_store::ObjectStore;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AGENTS_BODY: &str = r#"
    <nav><a href="/adk/">Docs home</a></nav>
    <h1>Agents</h1>
    <p>Agents are the core building block of the development kit and coordinate tools.</p>
    <pre><code class="language-python">agent = Agent(name="helper")</code></pre>
    <h2>Tools</h2>
    <p>Tools let agents call external functions and services during a conversation turn.</p>
    <footer>Copyright notice that must never reach the index</footer>
"#;

fn pipeline_config(server: &MockServer, dir: &TempDir) -> Config {
    let out = dir.path().display();
    let yaml = format!(
        r#"
gcp:
  project_id: test-project
  bucket_name: gs://test-bucket
crawler:
  base_url: "{base}/adk/"
  allowed_domains: ["{host}"]
  allowed_paths: ["/adk/"]
  user_agent: "TestBot/1.0"
  rate_limit_seconds: 0
  timeout_seconds: 5
  max_pages: 10
output:
  tmp_dir: "{out}"
  manifest_file: "{out}/manifest.json"
  raw_docs_file: "{out}/docs.jsonl"
  chunks_file: "{out}/chunks.jsonl"
"#,
        base = server.uri(),
        host = mock_host(server),
        out = out,
    );
    parse_config(&yaml).expect("Invalid test config")
}

async fn mount_site(server: &MockServer, hits: u64) {
    mount_page(
        server,
        "/adk/",
        "ADK Docs",
        r#"<h1>Welcome</h1>
        <p>This site documents every part of the agent development kit in depth.</p>
        <a href="/adk/agents">Agents</a>
        <a href="/adk/blank">Blank</a>"#,
        hits,
    )
    .await;
    mount_page(server, "/adk/agents", "Agents", AGENTS_BODY, hits).await;
    Mock::given(method("GET"))
        .and(path("/adk/blank"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .expect(hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_local_stages_write_all_artifacts() {
    let server = MockServer::start().await;
    mount_site(&server, 1).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = pipeline_config(&server, &dir);

    let summary = run_local_stages(&config).await.expect("Pipeline failed");

    // The blank page is crawled but yields no document
    assert_eq!(summary.pages_crawled, 3);
    assert_eq!(summary.documents, 2);
    assert!(summary.uploaded.is_none());

    let manifest = read_manifest(&summary.manifest_path).expect("Failed to read manifest");
    assert_eq!(manifest.total_pages, 3);
    assert_eq!(manifest.pages_visited, 3);
    assert_eq!(manifest.base_url, format!("{}/adk/", server.uri()));

    let docs: Vec<Document> = read_jsonl(&summary.docs_path).expect("Failed to read docs");
    assert_eq!(docs.len(), summary.documents);
    let agents = docs
        .iter()
        .find(|d| d.url.ends_with("/adk/agents"))
        .expect("Agents document missing");
    assert_eq!(agents.title, "Agents");
    assert_eq!(agents.source_type, "adk-docs");
    assert_eq!(agents.sections.len(), 2);
    assert_eq!(agents.sections[0].heading_path, vec!["Agents"]);
    assert_eq!(agents.sections[0].code_blocks[0].language, "python");
    assert_eq!(agents.sections[1].heading_path, vec!["Tools"]);
    for section in &agents.sections {
        assert!(!section.text.contains("Copyright"));
        assert!(!section.text.contains("Docs home"));
    }

    let chunks: Vec<Chunk> = read_jsonl(&summary.chunks_path).expect("Failed to read chunks");
    assert_eq!(chunks.len(), summary.chunks);
    assert_eq!(chunks.len(), 3);
    for chunk in &chunks {
        assert!(docs.iter().any(|d| d.doc_id == chunk.doc_id));
        assert!(!chunk.text.is_empty());
    }
}

#[tokio::test]
async fn test_chunk_ids_stable_across_runs() {
    let server = MockServer::start().await;
    mount_site(&server, 2).await;
    let first_dir = TempDir::new().expect("Failed to create temp dir");
    let second_dir = TempDir::new().expect("Failed to create temp dir");

    let first = run_local_stages(&pipeline_config(&server, &first_dir))
        .await
        .expect("First run failed");
    let second = run_local_stages(&pipeline_config(&server, &second_dir))
        .await
        .expect("Second run failed");

    let ids = |path: &std::path::Path| -> Vec<String> {
        read_jsonl::<Chunk>(path)
            .expect("Failed to read chunks")
            .into_iter()
            .map(|c| c.chunk_id)
            .collect()
    };
    assert_eq!(ids(&first.chunks_path), ids(&second.chunks_path));
}

#[tokio::test]
async fn test_skip_upload_leaves_artifacts_local() {
    let server = MockServer::start().await;
    mount_site(&server, 1).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = pipeline_config(&server, &dir);

    let summary = run_pipeline(&config, true).await.expect("Pipeline failed");

    assert!(summary.uploaded.is_none());
    assert!(summary.manifest_path.exists());
    assert!(summary.docs_path.exists());
    assert!(summary.chunks_path.exists());
}

#[tokio::test]
async fn test_upload_stage_pushes_local_artifacts() {
    let server = MockServer::start().await;
    mount_site(&server, 1).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = pipeline_config(&server, &dir);
    let summary = run_local_stages(&config).await.expect("Pipeline failed");

    let store = Arc::new(InMemory::new());
    let uploader = Uploader::new(store.clone(), config.gcp.bucket(), config.gcs_paths.clone());
    let uploaded = upload_stage(&uploader, &config.output)
        .await
        .expect("Upload failed");

    assert_eq!(uploaded.docs, "gs://test-bucket/adk-docs/raw/docs.jsonl");
    assert_eq!(uploaded.chunks, "gs://test-bucket/adk-docs/chunks/chunks.jsonl");
    assert!(uploaded
        .manifest
        .starts_with("gs://test-bucket/adk-docs/manifests/crawl-manifest-"));

    let stored = store
        .get(&ObjPath::from("adk-docs/raw/docs.jsonl"))
        .await
        .expect("Docs object missing")
        .bytes()
        .await
        .expect("Failed to read docs object");
    let local = std::fs::read(&summary.docs_path).expect("Failed to read local docs");
    assert_eq!(stored.as_ref(), local.as_slice());
}

#[tokio::test]
async fn test_upload_failure_keeps_earlier_artifacts() {
    let server = MockServer::start().await;
    mount_site(&server, 1).await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = pipeline_config(&server, &dir);
    let summary = run_local_stages(&config).await.expect("Pipeline failed");

    std::fs::remove_file(&summary.chunks_path).expect("Failed to remove chunks");

    let uploader = Uploader::new(Arc::new(InMemory::new()), "test-bucket", config.gcs_paths.clone());
    assert!(upload_stage(&uploader, &config.output).await.is_err());
    assert!(summary.docs_path.exists());
    assert!(summary.manifest_path.exists());
}
