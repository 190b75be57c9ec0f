//! # End-to-End Facade Flows
//!
//! Register and query through the public facade, exactly as a transport
//! wrapper would drive it.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use time::{Duration, OffsetDateTime};
    use timberline_store::{
        InMemoryRecordStore, LogApi, LogService, MemoryExportSink, ServiceError, StoreConfig,
        StoreEngine, SystemClock, TimeWindow, ZstdCodec,
    };

    fn service() -> LogService<InMemoryRecordStore, MemoryExportSink, ZstdCodec, SystemClock> {
        let engine = StoreEngine::new(
            InMemoryRecordStore::new(),
            MemoryExportSink::new(),
            ZstdCodec,
            SystemClock,
            StoreConfig::default(),
        );
        LogService::new(engine, SystemClock)
    }

    fn window_around_now() -> TimeWindow {
        let now = OffsetDateTime::now_utc();
        TimeWindow::between(now - Duration::hours(1), now + Duration::hours(1))
    }

    #[tokio::test]
    async fn test_register_then_query_by_matching_level() {
        let service = service();
        service
            .register("boom".to_string(), "error", HashMap::new())
            .await
            .unwrap();

        let result = service
            .query(window_around_now(), Some("error"), 0, 10)
            .await
            .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].message, "boom");
        assert_eq!(result.records[0].level.as_str(), "error");
        assert!(!result.has_more);
        assert_eq!(result.next_page, 0);
    }

    #[tokio::test]
    async fn test_query_by_other_level_matches_nothing() {
        let service = service();
        service
            .register("boom".to_string(), "error", HashMap::new())
            .await
            .unwrap();

        let result = service
            .query(window_around_now(), Some("info"), 0, 10)
            .await
            .unwrap();

        assert_eq!(result.total, 0);
        assert!(result.records.is_empty());
    }

    #[tokio::test]
    async fn test_window_excluding_now_matches_nothing() {
        let service = service();
        service
            .register("boom".to_string(), "error", HashMap::new())
            .await
            .unwrap();

        let now = OffsetDateTime::now_utc();
        let past = TimeWindow::between(now - Duration::hours(2), now - Duration::hours(1));
        let result = service.query(past, Some("error"), 0, 10).await.unwrap();

        assert_eq!(result.total, 0);
    }

    #[tokio::test]
    async fn test_metadata_round_trips() {
        let service = service();
        let mut metadata = HashMap::new();
        metadata.insert("service".to_string(), "billing".to_string());
        metadata.insert("region".to_string(), "eu-west-1".to_string());

        let registered = service
            .register("payment rejected".to_string(), "warn", metadata.clone())
            .await
            .unwrap();
        assert_eq!(registered.metadata, metadata);

        let result = service
            .query(TimeWindow::unbounded(), Some("warn"), 0, 10)
            .await
            .unwrap();
        assert_eq!(result.records[0].metadata, metadata);
        assert_eq!(result.records[0].id, registered.id);
    }

    #[tokio::test]
    async fn test_large_message_round_trips_compressed() {
        let service = service();
        let message = "connection reset while flushing the replication backlog ".repeat(20);

        let registered = service
            .register(message.clone(), "error", HashMap::new())
            .await
            .unwrap();
        assert!(registered.compressed);
        assert!(registered.compressed_at.is_some());

        let result = service
            .query(TimeWindow::unbounded(), None, 0, 10)
            .await
            .unwrap();
        assert_eq!(result.records[0].message, message);
    }

    #[tokio::test]
    async fn test_pagination_walk_over_the_facade() {
        let service = service();
        for i in 0..12 {
            service
                .register(format!("record {i}"), "debug", HashMap::new())
                .await
                .unwrap();
        }

        let mut seen = Vec::new();
        let mut page = 0;
        loop {
            let result = service
                .query(TimeWindow::unbounded(), None, page, 5)
                .await
                .unwrap();
            assert_eq!(result.total, 12);
            seen.extend(result.records.iter().map(|r| r.message.clone()));
            if !result.has_more {
                assert_eq!(result.next_page, page);
                break;
            }
            page = result.next_page;
        }

        assert_eq!(seen.len(), 12);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[tokio::test]
    async fn test_count_over_the_facade() {
        let service = service();
        for level in ["error", "error", "warn"] {
            service
                .register("x".to_string(), level, HashMap::new())
                .await
                .unwrap();
        }

        assert_eq!(
            service
                .count(TimeWindow::unbounded(), Some("error"))
                .await
                .unwrap(),
            2
        );
        assert_eq!(service.count(TimeWindow::unbounded(), None).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_validation_errors_over_the_facade() {
        let service = service();
        let now = OffsetDateTime::now_utc();

        let err = service
            .register("x".to_string(), "critical", HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidLevel { .. }));

        let err = service
            .query(
                TimeWindow::between(now, now - Duration::hours(1)),
                None,
                0,
                10,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTimeRange { .. }));
    }
}
