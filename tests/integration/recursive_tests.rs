//! Link-following crawl integration tests

use llmsgen::crawler::{build_http_client, CrawlLimits, RecursiveCrawler};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_with_links(title: &str, links: &[String]) -> ResponseTemplate {
    let anchors: String = links
        .iter()
        .map(|href| format!("<a href=\"{}\">{}</a>", href, href))
        .collect();
    ResponseTemplate::new(200).set_body_string(format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, anchors
    ))
}

#[tokio::test]
async fn test_cycle_terminates_and_visits_each_page_once() {
    let server = MockServer::start().await;
    let base = format!("{}/docs", server.uri());

    // A -> B -> A
    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(page_with_links("A", &[format!("{}/b", base)]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/b"))
        .respond_with(page_with_links("B", &[base.clone()]))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(client, &base, CrawlLimits::default()).unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn test_max_pages_bound_is_respected() {
    let server = MockServer::start().await;
    let base = server.uri();

    let links: Vec<String> = (1..=5).map(|i| format!("{}/p{}", base, i)).collect();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page_with_links("root", &links))
        .mount(&server)
        .await;
    for i in 1..=5 {
        Mock::given(method("GET"))
            .and(path(format!("/p{}", i)))
            .respond_with(page_with_links(&format!("p{}", i), &[]))
            .mount(&server)
            .await;
    }

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(
        client,
        &base,
        CrawlLimits {
            max_pages: 2,
            max_depth: 5,
        },
    )
    .unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn test_depth_bound_is_respected() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Chain: / -> /l1 -> /l2; with max_depth=1 the l2 entry is discarded
    // at dequeue time and never fetched
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page_with_links("root", &[format!("{}/l1", base)]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/l1"))
        .respond_with(page_with_links("l1", &[format!("{}/l2", base)]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/l2"))
        .respond_with(page_with_links("l2", &[]))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(
        client,
        &base,
        CrawlLimits {
            max_pages: 100,
            max_depth: 1,
        },
    )
    .unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 2);
    assert!(pages.contains_key(&format!("{}/l1", base)));
}

#[tokio::test]
async fn test_asset_links_are_not_followed() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page_with_links(
            "root",
            &[format!("{}/logo.png", base), format!("{}/guide", base)],
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/guide"))
        .respond_with(page_with_links("guide", &[]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(client, &base, CrawlLimits::default()).unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn test_external_links_are_not_followed() {
    let server = MockServer::start().await;
    let external = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page_with_links("root", &[format!("{}/elsewhere", external.uri())]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&external)
        .await;

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(client, &base, CrawlLimits::default()).unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn test_unreachable_link_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page_with_links(
            "root",
            &[format!("{}/gone", base), format!("{}/alive", base)],
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alive"))
        .respond_with(page_with_links("alive", &[]))
        .mount(&server)
        .await;

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(client, &base, CrawlLimits::default()).unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 2);
    assert!(!pages.contains_key(&format!("{}/gone", base)));
}

#[tokio::test]
async fn test_fragment_variants_dedup_to_one_fetch() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(page_with_links(
            "root",
            &[
                format!("{}/guide#intro", base),
                format!("{}/guide#usage", base),
            ],
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/guide"))
        .respond_with(page_with_links("guide", &[]))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_http_client().unwrap();
    let crawler = RecursiveCrawler::new(client, &base, CrawlLimits::default()).unwrap();
    let pages = crawler.crawl().await;

    assert_eq!(pages.len(), 2);
}
