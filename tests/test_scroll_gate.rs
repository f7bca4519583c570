use std::sync::Arc;
use std::time::Duration;

use paritydeck::{GateConfig, MemoryStore, ScrollGate, ScrollMetrics, SessionStore};
use paritydeck::core::scroll_gate::SUPPRESSION_KEY;

fn metrics(scroll_top: f32) -> ScrollMetrics {
    // viewport 1000, content 6000 => max_scroll 5000
    ScrollMetrics::new(scroll_top, 1000.0, 6000.0)
}

#[test]
fn bottom_tolerance_and_threshold_compose() {
    let store = Arc::new(MemoryStore::new());
    let mut gate = ScrollGate::new(GateConfig::default(), store);

    // 40px from the bottom fires even before any percentage math.
    assert!(gate.evaluate(metrics(4960.0)));
    assert!(gate.is_near_bottom());

    // Deep scroll percentage alone does not help a short distance.
    let mut short = ScrollGate::new(GateConfig::default(), Arc::new(MemoryStore::new()));
    assert!(!short.evaluate(ScrollMetrics::new(590.0, 500.0, 1100.0)));
}

#[test]
fn suppression_survives_a_rebuild_within_the_session() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut first = ScrollGate::new(GateConfig::default(), store.clone());
    assert!(first.evaluate(metrics(4960.0)));
    assert_eq!(store.get(SUPPRESSION_KEY)?, Some("1".to_string()));

    // A rebuilt gate over the same session storage starts latched and
    // never re-fires without a reset.
    let mut second = ScrollGate::new(GateConfig::default(), store.clone());
    assert!(second.has_triggered());
    assert!(!second.evaluate(metrics(4990.0)));

    second.reset_trigger();
    assert_eq!(store.get(SUPPRESSION_KEY)?, None);
    assert!(second.evaluate(metrics(4990.0)));
    Ok(())
}

#[test]
fn custom_configuration_moves_the_goalposts() {
    let config = GateConfig {
        threshold: 0.5,
        min_scroll_distance: 100.0,
        bottom_tolerance: 10.0,
        debounce: Duration::from_millis(50),
        once_per_session: false,
    };
    let mut gate = ScrollGate::new(config, Arc::new(MemoryStore::new()));

    // 50% of a 5000px range with a lower distance floor.
    assert!(gate.evaluate(metrics(2500.0)));
    assert!((gate.scroll_percentage() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn unscrollable_pages_never_arm_the_gate() {
    let mut gate = ScrollGate::new(GateConfig::default(), Arc::new(MemoryStore::new()));
    for scroll_top in [0.0, 10.0, 5000.0] {
        assert!(!gate.evaluate(ScrollMetrics::new(scroll_top, 800.0, 800.0)));
        assert!(!gate.evaluate(ScrollMetrics::new(scroll_top, 800.0, 600.0)));
    }
    assert!(!gate.is_near_bottom());
    assert!(!gate.has_triggered());
}
