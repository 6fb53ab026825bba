use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread;

use xkey_core::config::ConfigurationError;
use xkey_core::{CacheConfig, CacheStats, ErrorKind, KeyCache};

#[test]
fn test_hit_after_miss() {
    let cache = KeyCache::new();
    let first = cache.get_or_parse("Audio.Input[1].Volume").expect("key should parse");
    let second = cache.get_or_parse("Audio.Input[1].Volume").expect("key should parse");
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);

    let stats = cache.stats();
    assert_eq!(stats.hits.load(Ordering::Relaxed), 1);
    assert_eq!(stats.misses.load(Ordering::Relaxed), 1);
    assert!((stats.hit_ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_cached_keys_share_storage() {
    let cache = KeyCache::new();
    let first = cache.get_or_parse("a.b").expect("key should parse");
    let second = cache.get_or_parse("a.b").expect("key should parse");
    assert_eq!(first.identity_index_of(&second.segments()[1]).expect("same storage"), 1);
}

#[test]
fn test_parse_failures_not_cached() {
    let cache = KeyCache::new();
    let error = cache.get_or_parse("a..b").expect_err("malformed key should fail");
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert!(cache.is_empty());
    assert_eq!(cache.stats().parse_failures.load(Ordering::Relaxed), 1);
}

#[test]
fn test_eviction_when_full() {
    let cache = KeyCache::with_config(CacheConfig::default().with_max_entries(10))
        .expect("ten entries is a valid capacity");
    for i in 0..10 {
        cache.get_or_parse(&format!("a[{i}]")).expect("key should parse");
    }
    assert_eq!(cache.len(), 10);

    cache.get_or_parse("a[10]").expect("key should parse");
    assert_eq!(cache.len(), 10);
    assert_eq!(cache.stats().evictions.load(Ordering::Relaxed), 1);
}

#[test]
fn test_disabled_cache_still_parses() {
    let cache = KeyCache::with_config(CacheConfig::no_cache()).expect("no_cache is valid");
    let parsed = cache.get_or_parse("Standby.State").expect("key should parse");
    assert_eq!(parsed.to_string(), "Standby.State");
    assert!(cache.is_empty());
    assert_eq!(cache.stats().hits.load(Ordering::Relaxed), 0);
    assert_eq!(cache.stats().misses.load(Ordering::Relaxed), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let error = KeyCache::with_config(CacheConfig::default().with_max_entries(3))
        .expect_err("three entries is too small");
    assert!(matches!(error, ConfigurationError::InvalidCapacity(_)));
}

#[test]
fn test_clear_keeps_stats() {
    let cache = KeyCache::new();
    cache.get_or_parse("a").expect("key should parse");
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats().misses.load(Ordering::Relaxed), 1);
}

#[test]
fn test_concurrent_lookups() {
    let cache = Arc::new(KeyCache::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50 {
                    cache
                        .get_or_parse(&format!("Peripherals.ConnectedDevice[{}].Name", i % 5))
                        .expect("key should parse");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker should not panic");
    }

    assert_eq!(cache.len(), 5);
    let stats = cache.stats();
    assert_eq!(
        stats.hits.load(Ordering::Relaxed) + stats.misses.load(Ordering::Relaxed),
        400
    );
}

#[test]
fn test_fresh_stats_report_nothing() {
    let stats = CacheStats::new();
    assert_eq!(stats.hits.load(Ordering::Relaxed), 0);
    assert_eq!(stats.evictions.load(Ordering::Relaxed), 0);
    assert!(stats.hit_ratio().abs() < f64::EPSILON);

    stats.record_evictions(3);
    stats.record_parse_failure();
    assert_eq!(stats.evictions.load(Ordering::Relaxed), 3);
    assert_eq!(stats.parse_failures.load(Ordering::Relaxed), 1);
}
