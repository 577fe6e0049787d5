use mockito::Matcher;
use shared::NewsApiClient;

#[tokio::test]
async fn test_fetch_trending_sends_contract_params_and_parses_articles() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "electric vehicles".into()),
            Matcher::UrlEncoded("sortBy".into(), "popularity".into()),
            Matcher::UrlEncoded("language".into(), "en".into()),
            Matcher::UrlEncoded("pageSize".into(), "5".into()),
            Matcher::UrlEncoded("apiKey".into(), "fake-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "status": "ok",
                "totalResults": 2,
                "articles": [
                    {
                        "title": "EV sales surge",
                        "description": "Quarterly numbers are up.",
                        "source": {"id": null, "name": "Example Wire"},
                        "publishedAt": "2026-08-01T09:00:00Z",
                        "url": "https://example.com/ev-sales"
                    },
                    {
                        "title": "Charging network grows",
                        "description": null,
                        "source": {"name": "Daily Grid"},
                        "publishedAt": null,
                        "url": null
                    }
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = NewsApiClient::new("fake-key".to_string())
        .unwrap()
        .with_base_url(server.url());

    let articles = client.fetch_trending("electric vehicles").await.unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title.as_deref(), Some("EV sales surge"));
    assert_eq!(articles[0].source.name.as_deref(), Some("Example Wire"));
    assert_eq!(articles[1].description, None);
    assert_eq!(articles[1].url, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let client = NewsApiClient::new("fake-key".to_string())
        .unwrap()
        .with_base_url(server.url());

    let err = client.fetch_trending("anything").await.unwrap_err();

    assert!(err.to_string().contains("429"));
    mock.assert_async().await;
}
