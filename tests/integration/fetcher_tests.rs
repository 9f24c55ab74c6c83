//! Image fetcher tests over real HTTP

#[cfg(test)]
mod tests {
    use image_attacher::core::fetcher::{FetchError, ReqwestFetcher, fetch_image, try_fetch_image};
    use image_attacher::utils::net::HttpClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> ReqwestFetcher {
        ReqwestFetcher::from_config(&HttpClientConfig::default()).unwrap()
    }

    /// A 404 yields no bytes and no panic
    #[tokio::test]
    async fn test_not_found_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone.png"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .expect(1)
            .mount(&server)
            .await;

        let result = fetch_image(&fetcher(), &format!("{}/gone.png", server.uri())).await;
        assert!(result.is_none());
    }

    /// An HTML page behind an image-looking URL is rejected
    #[tokio::test]
    async fn test_html_returns_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/login.jpg"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html>please log in</html>", "text/html; charset=utf-8"),
            )
            .expect(2)
            .mount(&server)
            .await;

        let url = format!("{}/login.jpg", server.uri());
        assert!(fetch_image(&fetcher(), &url).await.is_none());

        match try_fetch_image(&fetcher(), &url).await {
            Err(FetchError::ContentType(Some(ct))) => assert!(ct.starts_with("text/html")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Content-type parameters do not matter as long as the type is image/*
    #[tokio::test]
    async fn test_image_with_parameters_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/webp; q=0.9")
                    .set_body_bytes(b"RIFF....WEBP".to_vec()),
            )
            .mount(&server)
            .await;

        let result = fetch_image(&fetcher(), &format!("{}/pic.webp", server.uri())).await;
        assert_eq!(result.map(|b| b.len()), Some(12));
    }
}
