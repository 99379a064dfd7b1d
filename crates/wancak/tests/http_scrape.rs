//! End-to-end scraping against a mock site served by wiremock.

use wancak::{ClientConfig, Section, Wancak, WancakError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────── fixtures ───────────────────────

const HOT_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>1CAK - Hot</title></head>
<body>
<div id="header"><table><tr><td><a href="/">Home</a></td></tr></table></div>
<div id="content">
  <table class="post">
    <tr><td>
      <span class="upperSpan" rel="1001"></span>
      <h3><a href="/1001">Senin lagi</a></h3>
      <a href="/1001"><img src="https://cdn16.1cak.com/posts/1001.jpg" alt="Senin lagi"></a>
      <span class="vote">Lucu: <span id="span_vote_1001">321</span></span>
    </td></tr>
  </table>
  <table class="post">
    <tr><td>
      <span class="upperSpan" rel="1000"></span>
      <h3><a href="/1000">Jangan dibuka</a></h3>
      <a href="/1000"><img src="/images/unsave.jpg"></a>
      <span class="vote">Lucu: <span id="span_vote_1000">12</span></span>
    </td></tr>
  </table>
</div>
<a id="next_page_link" href="/lol-999">Next</a>
</body></html>"#;

const SEARCH_PAGE: &str = r#"<html><body>
  <table><tr><td>
    <span class="upperSpan" rel="77"></span><h3>Kucing lucu</h3>
    <img src="https://cdn16.1cak.com/posts/77.jpg"><span id="span_vote_77">8</span>
  </td></tr></table>
  <a id="next_page_link" href="search-1-kucing+lucu">Next</a>
</body></html>"#;

const NOT_FOUND_PAGE: &str = r#"<html><body>
  <div class="error"><img src="templates/v1/img/error.png" alt="404"></div>
</body></html>"#;

fn post_page(base: &str) -> String {
    format!(
        r#"<html><body>
  <h3>Senin lagi</h3>
  <img src="https://cdn16.1cak.com/posts/1001.jpg" title="Senin lagi">
  <span id="span_vote_1001">321</span>
  <div class="fb-comments" data-href="{base}/1001" data-width="500"></div>
</body></html>"#
    )
}

async fn serve(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> Wancak {
    let config = ClientConfig::default().base_url(server.uri());
    Wancak::new(&config).unwrap()
}

// ─────────────────────── tests ───────────────────────

#[tokio::test]
async fn test_section_first_page() {
    let server = MockServer::start().await;
    serve(&server, "/lol", 200, HOT_PAGE.to_string()).await;

    let posts = client_for(&server).section(Section::Hot, None).await.unwrap();
    assert_eq!(posts.page.next, "999");
    assert_eq!(posts.count(), 2, "header table has no upperSpan and is skipped");

    let safe = &posts.posts[0];
    assert_eq!(safe.id, "1001");
    assert_eq!(safe.title, "Senin lagi");
    assert_eq!(safe.url, format!("{}/1001", server.uri()));
    assert_eq!(safe.img, "https://cdn16.1cak.com/posts/1001.jpg");
    assert_eq!(safe.votes, "321");
    assert!(!safe.nsfw);

    let nsfw = &posts.posts[1];
    assert_eq!(nsfw.img, format!("{}/images/unsave.jpg", server.uri()));
    assert!(nsfw.nsfw);
}

#[tokio::test]
async fn test_section_with_cursor() {
    let server = MockServer::start().await;
    serve(&server, "/lol-999", 200, HOT_PAGE.to_string()).await;

    let posts = client_for(&server)
        .section_posts("lol", Some("999"))
        .await
        .unwrap();
    assert_eq!(posts.posts[0].id, "1001");
}

#[tokio::test]
async fn test_search_escapes_query() {
    let server = MockServer::start().await;
    serve(&server, "/search-0-kucing+lucu", 200, SEARCH_PAGE.to_string()).await;

    let posts = client_for(&server).search("kucing lucu", None).await.unwrap();
    assert_eq!(posts.page.next, "1");
    assert_eq!(posts.posts[0].title, "Kucing lucu");
}

#[tokio::test]
async fn test_post_by_id() {
    let server = MockServer::start().await;
    serve(&server, "/1001", 200, post_page(&server.uri())).await;

    let post = client_for(&server).post("1001").await.unwrap();
    assert_eq!(post.id, "1001");
    assert_eq!(post.title, "Senin lagi");
    assert_eq!(post.url, format!("{}/1001", server.uri()));
    assert_eq!(post.votes, "321");
    assert!(!post.nsfw);
}

#[tokio::test]
async fn test_random_post_uses_shuffle() {
    let server = MockServer::start().await;
    serve(&server, "/shuffle", 200, post_page(&server.uri())).await;

    let post = client_for(&server).random_post().await.unwrap();
    assert_eq!(post.id, "1001");
}

#[tokio::test]
async fn test_not_found_page_even_with_404_status() {
    let server = MockServer::start().await;
    serve(&server, "/424242", 404, NOT_FOUND_PAGE.to_string()).await;

    let err = client_for(&server).post("424242").await.unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[tokio::test]
async fn test_invalid_section_hits_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOT_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .section_posts("terbaru", None)
        .await
        .unwrap_err();
    assert!(matches!(err, WancakError::InvalidSection(_)));
}

#[tokio::test]
async fn test_listing_without_next_link() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/trend",
        200,
        "<html><body><p>kosong</p></body></html>".to_string(),
    )
    .await;

    let err = client_for(&server).section(Section::Trending, None).await.unwrap_err();
    assert!(matches!(err, WancakError::MissingNextPage(_)));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let config = ClientConfig::default()
        .base_url("http://127.0.0.1:1")
        .timeout_ms(2_000);
    let err = Wancak::new(&config).unwrap().random_post().await.unwrap_err();
    assert!(matches!(err, WancakError::Http(_)));
}
