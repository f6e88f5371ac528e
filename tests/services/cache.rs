use dividash::cache::TtlCache;
use std::time::Duration;

#[tokio::test]
async fn test_get_within_ttl() {
    let cache: TtlCache<String> = TtlCache::new(Duration::from_secs(60));
    cache.put("AAPL:6mo", "payload".to_string()).await;
    assert_eq!(cache.get("AAPL:6mo").await.as_deref(), Some("payload"));
}

#[tokio::test]
async fn test_miss_for_unknown_key() {
    let cache: TtlCache<String> = TtlCache::new(Duration::from_secs(60));
    assert_eq!(cache.get("MSFT:6mo").await, None);
}

#[tokio::test]
async fn test_expired_entry_reads_as_miss() {
    let cache: TtlCache<String> = TtlCache::new(Duration::from_millis(20));
    cache.put("AAPL:6mo", "payload".to_string()).await;
    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(cache.get("AAPL:6mo").await, None);
}

#[tokio::test]
async fn test_invalidate_removes_entry() {
    let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
    cache.put("k", 1).await;
    cache.invalidate("k").await;
    assert_eq!(cache.get("k").await, None);
}

#[tokio::test]
async fn test_put_overwrites() {
    let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
    cache.put("k", 1).await;
    cache.put("k", 2).await;
    assert_eq!(cache.get("k").await, Some(2));
}

#[tokio::test]
async fn test_clear_empties_cache() {
    let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
    cache.put("a", 1).await;
    cache.put("b", 2).await;
    cache.clear().await;
    assert_eq!(cache.get("a").await, None);
    assert_eq!(cache.get("b").await, None);
}
