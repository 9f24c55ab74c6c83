//! Whole-pipeline tests against a mock Airtable and image host

#[cfg(test)]
mod tests {
    use crate::common::{
        config_for, image_url, mount_listing, mount_png, record_path, row, table_path,
    };
    use image_attacher::{AttacherError, BatchOrchestrator};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Valid, empty, unsupported and unreachable rows side by side
    #[tokio::test]
    async fn test_mixed_rows_only_valid_image_is_attached() {
        let server = MockServer::start().await;
        let good = image_url(&server, "a.png");
        let unsupported = image_url(&server, "b.bmp");
        let missing = image_url(&server, "missing.jpg");

        mount_listing(
            &server,
            vec![
                row("r1", &good),
                row("r2", ""),
                row("r3", &unsupported),
                row("r4", &missing),
            ],
        )
        .await;
        mount_png(&server, "a.png", 1).await;
        mount_png(&server, "b.bmp", 0).await;
        Mock::given(method("GET"))
            .and(path("/img/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PATCH"))
            .and(path(record_path("r1")))
            .and(header("authorization", "Bearer patTEST"))
            .and(body_json(json!({
                "fields": { "Image": [{ "url": good, "filename": "a.png" }] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "r1" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let summary = BatchOrchestrator::from_config(&config_for(&server))
            .unwrap()
            .process_all()
            .await
            .unwrap();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.batch_sizes, vec![4]);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed, 1);
    }

    /// Seven rows make two batches and every valid row is written once
    #[tokio::test]
    async fn test_two_batches_each_row_written_once() {
        let server = MockServer::start().await;
        let rows = (0..7)
            .map(|i| row(&format!("rec{}", i), &image_url(&server, &format!("{}.jpg", i))))
            .collect();
        mount_listing(&server, rows).await;

        for i in 0..7 {
            let name = format!("{}.jpg", i);
            mount_png(&server, &name, 1).await;
            Mock::given(method("PATCH"))
                .and(path(record_path(&format!("rec{}", i))))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let summary = BatchOrchestrator::from_config(&config_for(&server))
            .unwrap()
            .process_all()
            .await
            .unwrap();

        assert_eq!(summary.batch_sizes, vec![5, 2]);
        assert_eq!(summary.pauses, 1);
        assert_eq!(summary.updated, 7);
    }

    /// A rejected write leaves the rest of the batch alone
    #[tokio::test]
    async fn test_rejected_write_is_a_row_failure() {
        let server = MockServer::start().await;
        mount_listing(
            &server,
            vec![
                row("ok", &image_url(&server, "ok.png")),
                row("bad", &image_url(&server, "bad.png")),
            ],
        )
        .await;
        mount_png(&server, "ok.png", 1).await;
        mount_png(&server, "bad.png", 1).await;

        Mock::given(method("PATCH"))
            .and(path(record_path("bad")))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "error": { "type": "INVALID_VALUE_FOR_COLUMN", "message": "Field \"Image\" cannot accept the provided value" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(record_path("ok")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let summary = BatchOrchestrator::from_config(&config_for(&server))
            .unwrap()
            .process_all()
            .await
            .unwrap();

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.failed, 1);
    }

    /// Listing failure aborts before any image is requested
    #[tokio::test]
    async fn test_listing_failure_aborts_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(table_path()))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "type": "AUTHENTICATION_REQUIRED", "message": "Authentication required" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = BatchOrchestrator::from_config(&config_for(&server))
            .unwrap()
            .process_all()
            .await
            .unwrap_err();

        match err {
            AttacherError::Store { status, message } => {
                assert_eq!(status, 401);
                assert!(message.starts_with("AUTHENTICATION_REQUIRED"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
