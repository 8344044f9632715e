use super::*;

#[test]
fn stat_rows_render_every_metric() {
    let stats: CacheStats = serde_json::from_value(serde_json::json!({
        "hits": 120,
        "misses": 7,
        "backend": "redis",
    }))
    .unwrap();

    assert_eq!(
        stat_rows(&stats),
        vec![
            ("backend".to_owned(), "redis".to_owned()),
            ("hits".to_owned(), "120".to_owned()),
            ("misses".to_owned(), "7".to_owned()),
        ]
    );
}

#[test]
fn stat_rows_empty_stats() {
    assert!(stat_rows(&CacheStats::default()).is_empty());
}

#[test]
fn clear_notice_prefers_backend_message() {
    assert_eq!(clear_notice("  flushed 42 keys "), "flushed 42 keys");
    assert_eq!(clear_notice(""), "Cache cleared.");
}
