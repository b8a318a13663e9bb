use std::collections::HashSet;
use std::sync::Arc;
use wiremock::matchers::path;
use wiremock::{Mock, MockServer, ResponseTemplate};
use site_crawler::config::OutputFormat;
use site_crawler::crawler::{self, CrawlerConfig};
use site_crawler::output;

/// Small site: a home page, two sections sharing an article, and some noise
async fn mount_site(server: &MockServer) {
    let base = server.uri();
    let pages = [
        ("/", format!(r#"
            <nav><a href="{0}/docs">Docs</a> <a href="{0}/blog">Blog</a></nav>
            <a href="https://github.com/example">GitHub</a>
            <a href="mailto:team@example.com">Mail</a>
        "#, base)),
        ("/docs", format!(r#"<a href="{0}">Home</a><a href="{0}/docs/intro">Intro</a>"#, base)),
        ("/blog", format!(r##"<a href="{0}/docs/intro">Intro</a><a href="#comments">Comments</a>"##, base)),
        ("/docs/intro", format!(r#"<a href="{0}/docs">Back</a>"#, base)),
    ];
    for (page, body) in pages {
        Mock::given(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_crawl_whole_site() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let base = server.uri();

    let links: HashSet<String> = crawler::traverse(&base, 0).await?.into_iter().collect();

    let expected: HashSet<String> = ["", "/docs", "/blog", "/docs/intro"]
        .iter()
        .map(|p| format!("{}{}", base, p))
        .collect();
    assert_eq!(links, expected);
    Ok(())
}

#[tokio::test]
async fn test_crawl_with_config_and_write_json() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let seed = server.uri();
    let config = Arc::new(
        CrawlerConfig::from_seed(&seed)?
            .with_limit(100)
            .with_request_timeout(5),
    );
    let links = crawler::crawl(config).await?;
    assert_eq!(links.len(), 4);

    let mut out = Vec::new();
    output::write_links(&links, OutputFormat::Json, &mut out)?;
    let parsed: Vec<String> = serde_json::from_slice(&out)?;
    assert_eq!(parsed.len(), 4);
    assert!(parsed.contains(&seed));
    Ok(())
}

#[tokio::test]
async fn test_limit_stops_early() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let links = crawler::traverse(&server.uri(), 2).await?;
    assert_eq!(links.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_invalid_seed_fails_before_crawling() {
    let result = crawler::traverse("example.com/no-scheme", 0).await;
    assert!(result.is_err());
}
