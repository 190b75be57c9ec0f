//! # Streaming Sessions
//!
//! Chunked streaming through the adapter over a live facade, with the
//! receiver playing the transport.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tokio::sync::mpsc;
    use timberline_store::{
        stream_query, InMemoryRecordStore, LogApi, LogService, MemoryExportSink, SearchResult,
        StoreConfig, StoreEngine, StreamConfig, StreamRequest, SystemClock, ZstdCodec,
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

    #[tokio::test]
    async fn test_single_page_session_emits_one_chunk_and_closes() {
        let service = service();
        for i in 0..4 {
            service
                .register(format!("record {i}"), "info", HashMap::new())
                .await
                .unwrap();
        }

        let (mut tx, mut rx) = mpsc::channel::<SearchResult>(8);
        let request = StreamRequest {
            page_size: 10,
            ..Default::default()
        };

        stream_query(&service, &request, &mut tx, &StreamConfig::default())
            .await
            .unwrap();
        drop(tx);

        let chunk = rx.recv().await.unwrap();
        assert_eq!(chunk.records.len(), 4);
        assert!(!chunk.has_more);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_session_runs_concurrently_with_the_receiver() {
        let service = std::sync::Arc::new(service());
        for i in 0..30 {
            service
                .register(format!("record {i}"), "debug", HashMap::new())
                .await
                .unwrap();
        }

        let (mut tx, mut rx) = mpsc::channel::<SearchResult>(1);
        let streamer = {
            let service = std::sync::Arc::clone(&service);
            tokio::spawn(async move {
                let request = StreamRequest {
                    page_size: 7,
                    ..Default::default()
                };
                stream_query(service.as_ref(), &request, &mut tx, &StreamConfig::default()).await
            })
        };

        let mut total_seen = 0;
        while let Some(chunk) = rx.recv().await {
            total_seen += chunk.records.len();
        }
        streamer.await.unwrap().unwrap();

        assert_eq!(total_seen, 30);
    }

    #[tokio::test]
    async fn test_dropping_the_receiver_cancels_the_session() {
        let service = service();
        for i in 0..50 {
            service
                .register(format!("record {i}"), "info", HashMap::new())
                .await
                .unwrap();
        }

        let (mut tx, rx) = mpsc::channel::<SearchResult>(1);
        drop(rx);

        let request = StreamRequest {
            page_size: 5,
            ..Default::default()
        };
        let result = stream_query(&service, &request, &mut tx, &StreamConfig::default()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_level_filtered_session_only_streams_matches() {
        let service = service();
        for i in 0..6 {
            let level = if i % 2 == 0 { "error" } else { "info" };
            service
                .register(format!("record {i}"), level, HashMap::new())
                .await
                .unwrap();
        }

        let (mut tx, mut rx) = mpsc::channel::<SearchResult>(8);
        let request = StreamRequest {
            level: Some("error".to_string()),
            page_size: 2,
            ..Default::default()
        };

        stream_query(&service, &request, &mut tx, &StreamConfig::default())
            .await
            .unwrap();
        drop(tx);

        let mut messages = Vec::new();
        while let Some(chunk) = rx.recv().await {
            assert_eq!(chunk.total, 3);
            messages.extend(chunk.records.into_iter().map(|r| r.message));
        }
        assert_eq!(messages.len(), 3);
        for message in &messages {
            let i: usize = message.trim_start_matches("record ").parse().unwrap();
            assert_eq!(i % 2, 0);
        }
    }
}
