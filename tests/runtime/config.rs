//! Integration tests for EngineConfig

use std::sync::Arc;

use lexitag_foundation::{DiagnosticBuffer, DiagnosticKind};
use lexitag_runtime::{Engine, EngineConfig};

#[test]
fn cache_capacities_flow_into_engine() {
    let config = EngineConfig::quiet()
        .with_decode_cache_capacity(3)
        .with_classify_cache_capacity(2);
    let engine = Engine::new(config).unwrap();

    let stats = engine.cache_stats();
    assert_eq!(stats.decode.capacity, 3);
    assert_eq!(stats.classify.capacity, 2);
    assert_eq!(engine.config().decode_cache_capacity, 3);
}

#[test]
fn compact_preset_bounds_memory() {
    let engine = Engine::new(EngineConfig::compact()).unwrap();
    let stats = engine.cache_stats();
    assert_eq!(stats.decode.capacity, 1024);
    assert_eq!(stats.classify.capacity, 256);
}

#[test]
fn uncached_preset_recomputes() {
    let engine = Engine::new(EngineConfig::uncached()).unwrap();
    let first = engine.decode_tags("plural", false, false);
    let second = engine.decode_tags("plural", false, false);
    assert_eq!(first, second);
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn diagnostics_go_to_one_sink() {
    let buffer = Arc::new(DiagnosticBuffer::new(32));
    let engine = Engine::new(EngineConfig::default().with_diagnostics(buffer.clone())).unwrap();

    let _ = engine.decode_tags("zzyzx", false, false);
    let _ = engine.parse_head_final_tags("German", "Haus", "Haus du");

    assert_eq!(buffer.by_kind(DiagnosticKind::UnknownTag).len(), 1);
    assert_eq!(buffer.by_kind(DiagnosticKind::UnhandledSuffix).len(), 1);
}

#[test]
fn classification_does_not_report() {
    let buffer = Arc::new(DiagnosticBuffer::new(32));
    let engine = Engine::new(EngineConfig::default().with_diagnostics(buffer.clone())).unwrap();
    let _ = engine.classify_desc("zzyzx qwxv", false, false);
    assert!(buffer.is_empty());
}
