//! # Durability
//!
//! The JSONL-backed store across process restarts (simulated by reopening
//! the store on the same path).

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use timberline_store::{
        JsonlRecordStore, LogApi, LogService, MemoryExportSink, StoreConfig, StoreEngine,
        SystemClock, TimeWindow, ZstdCodec,
    };

    fn service_on(
        path: &Path,
    ) -> LogService<JsonlRecordStore, MemoryExportSink, ZstdCodec, SystemClock> {
        let engine = StoreEngine::new(
            JsonlRecordStore::open(path).unwrap(),
            MemoryExportSink::new(),
            ZstdCodec,
            SystemClock,
            StoreConfig::default(),
        );
        LogService::new(engine, SystemClock)
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");

        {
            let service = service_on(&path);
            service
                .register("persisted".to_string(), "info", HashMap::new())
                .await
                .unwrap();
        }

        let reopened = service_on(&path);
        let result = reopened
            .query(TimeWindow::unbounded(), None, 0, 10)
            .await
            .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.records[0].message, "persisted");
    }

    #[tokio::test]
    async fn test_compressed_records_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let message = "a durable message long enough to be compressed at rest ".repeat(5);

        {
            let service = service_on(&path);
            let registered = service
                .register(message.clone(), "error", HashMap::new())
                .await
                .unwrap();
            assert!(registered.compressed);
        }

        let reopened = service_on(&path);
        let result = reopened
            .query(TimeWindow::unbounded(), Some("error"), 0, 10)
            .await
            .unwrap();
        assert_eq!(result.records[0].message, message);
        assert!(result.records[0].compressed);
    }

    #[tokio::test]
    async fn test_query_results_interleave_with_new_ingestions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let service = service_on(&path);

        service
            .register("old".to_string(), "info", HashMap::new())
            .await
            .unwrap();
        let first = service.query(TimeWindow::unbounded(), None, 0, 10).await.unwrap();
        assert_eq!(first.total, 1);

        service
            .register("new".to_string(), "info", HashMap::new())
            .await
            .unwrap();
        let second = service.query(TimeWindow::unbounded(), None, 0, 10).await.unwrap();
        assert_eq!(second.total, 2);
        // Newest first
        assert_eq!(second.records[0].message, "new");
    }
}
