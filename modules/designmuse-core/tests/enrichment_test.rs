//! Fan-out enrichment: per-suggestion isolation, query resolution,
//! augmentation, and usage reporting. All through in-memory fakes.

mod support;

use std::sync::Arc;

use designmuse_core::orchestrator::AssetOrchestrator;
use unsplash_client::Orientation;

use support::*;

fn static_photos() -> Arc<StaticPhotos> {
    Arc::new(StaticPhotos {
        results: vec![photo("p1"), photo("p2")],
        total_pages: 1,
    })
}

#[tokio::test]
async fn partial_failure_stays_per_suggestion() {
    let orchestrator = AssetOrchestrator::new(Arc::new(FailingGifs), static_photos());

    let suggestions = vec![
        suggestion("gifs", &["confetti", "celebration"]),
        suggestion("images", &["mountain", "sunrise"]),
    ];
    let enriched = orchestrator.enrich(&suggestions, 5).await;

    assert_eq!(enriched.len(), 2);

    let failed = &enriched[0];
    assert!(failed.preview_items.is_empty());
    assert!(failed.more_action.is_none());
    let error = failed.fetch_error.as_deref().expect("fetch_error not set");
    assert!(!error.is_empty());

    let ok = &enriched[1];
    assert!(ok.fetch_error.is_none());
    assert_eq!(ok.preview_items.len(), 2);
    assert!(ok.more_action.is_some());
}

#[tokio::test]
async fn unknown_element_type_degrades_to_empty_items() {
    let orchestrator = AssetOrchestrator::new(
        Arc::new(StaticGifs {
            results: vec![gif("g1")],
            next: None,
        }),
        static_photos(),
    );

    let enriched = orchestrator
        .enrich(&[suggestion("stickers", &["shiny", "star"])], 5)
        .await;

    assert_eq!(enriched.len(), 1);
    assert!(enriched[0].preview_items.is_empty());
    assert!(enriched[0].fetch_error.is_none());
    assert!(enriched[0].more_action.is_none());
}

#[tokio::test]
async fn more_action_carries_resolved_query_not_keywords() {
    let gifs = RecordingGifs::new();
    let orchestrator = AssetOrchestrator::new(gifs.clone(), static_photos());

    let enriched = orchestrator
        .enrich(
            &[suggestion("memes", &["monday", "mood", "coffee", "office"])],
            5,
        )
        .await;

    let more = enriched[0].more_action.as_ref().expect("more_action not set");
    // The saved query is the first two keywords, without augmentation;
    // augmentation is reapplied at dispatch on both paths.
    assert_eq!(more.search_query, "monday mood");
    assert_eq!(more.element_type, "memes");
    assert_eq!(more.context_key, "memes|monday mood");

    let calls = gifs.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "monday mood meme");
    assert_eq!(calls[0].1, 5);
}

#[tokio::test]
async fn background_search_is_augmented_and_landscape() {
    let photos = RecordingPhotos::new(1);
    let orchestrator = AssetOrchestrator::new(
        Arc::new(StaticGifs {
            results: Vec::new(),
            next: None,
        }),
        photos.clone(),
    );

    orchestrator
        .enrich(&[suggestion("background", &["ocean", "waves", "blue"])], 8)
        .await;

    let calls = photos.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (query, options) = &calls[0];
    assert_eq!(query, "ocean waves background texture abstract");
    assert_eq!(options.orientation, Some(Orientation::Landscape));
    assert_eq!(options.per_page, 8);
    assert_eq!(options.page, 1);
}

#[tokio::test]
async fn every_suggestion_in_a_mixed_batch_is_settled() {
    let orchestrator = AssetOrchestrator::new(
        Arc::new(StaticGifs {
            results: vec![gif("g1"), gif("g2")],
            next: Some("cursor".to_string()),
        }),
        static_photos(),
    );

    let suggestions = vec![
        suggestion("gifs", &["confetti"]),
        suggestion("stickers", &["star"]),
        suggestion("illustrations", &["plants", "line art"]),
    ];
    let enriched = orchestrator.enrich(&suggestions, 5).await;

    assert_eq!(enriched.len(), 3);
    assert_eq!(enriched[0].preview_items.len(), 2);
    assert!(enriched[1].preview_items.is_empty());
    assert_eq!(enriched[2].preview_items.len(), 2);

    // Ids are provider-prefixed and unique across the whole batch.
    let mut ids: Vec<&str> = enriched
        .iter()
        .flat_map(|e| e.preview_items.iter().map(|i| i.id.as_str()))
        .collect();
    ids.sort();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[tokio::test]
async fn custom_gif_search_uses_its_own_id_prefix() {
    let orchestrator = AssetOrchestrator::new(
        Arc::new(StaticGifs {
            results: vec![gif("77")],
            next: None,
        }),
        static_photos(),
    );

    let items = orchestrator.custom_gif_search("dancing cat", 10).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "tenor_custom_77");
}

#[tokio::test]
async fn report_usage_pings_unsplash_only() {
    let photos = RecordingPhotos::new(1);
    let orchestrator = AssetOrchestrator::new(
        Arc::new(StaticGifs {
            results: vec![gif("g1")],
            next: None,
        }),
        photos.clone(),
    );

    let enriched = orchestrator
        .enrich(
            &[
                suggestion("images", &["mountain", "sunrise"]),
                suggestion("gifs", &["confetti"]),
            ],
            5,
        )
        .await;

    let photo_item = &enriched[0].preview_items[0];
    let gif_item = &enriched[1].preview_items[0];

    orchestrator.report_usage(photo_item).await;
    orchestrator.report_usage(gif_item).await;

    let tracked = photos.tracked.lock().unwrap();
    assert_eq!(tracked.as_slice(), ["p1"]);
}
