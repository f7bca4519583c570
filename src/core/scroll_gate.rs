use std::sync::Arc;
use std::time::Duration;

use crate::core::session::SessionStore;

/// Session-store key under which the "already fired" flag is persisted.
pub const SUPPRESSION_KEY: &str = "paritydeck.feedback-prompt.shown";

/// Tuning knobs for the bottom-of-page detector.
///
/// `bottom_tolerance` and `threshold` encode the same heuristic the
/// production dashboard shipped with: a scroll position counts as
/// "near the bottom" when it is within a small absolute distance of
/// the true bottom, or past a fraction of the scrollable range. Both
/// change user-visible trigger timing, so they are configuration
/// rather than constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateConfig {
    /// Fraction of the scrollable distance that counts as near-bottom.
    pub threshold: f32,
    /// Minimum absolute scroll distance before the gate may arm.
    pub min_scroll_distance: f32,
    /// Absolute tolerance (in pixels) near the true bottom.
    pub bottom_tolerance: f32,
    /// Quiet period for the trailing debounce of scroll events.
    pub debounce: Duration,
    /// Fire at most once per session, persisted via the session store.
    pub once_per_session: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: 0.85,
            min_scroll_distance: 1000.0,
            bottom_tolerance: 50.0,
            debounce: Duration::from_millis(200),
            once_per_session: true,
        }
    }
}

/// A snapshot of the scrollable viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }
}

/// One-shot detector for "the user scrolled to the bottom of the page".
///
/// The gate latches on first trigger and, when `once_per_session` is
/// set, records the fact in the session store so a rebuilt instance in
/// the same session starts already-fired. Storage failures are
/// non-fatal: the gate silently degrades to in-memory suppression.
#[derive(Debug, Clone)]
pub struct ScrollGate {
    config: GateConfig,
    store: Arc<dyn SessionStore>,
    scroll_percentage: f32,
    near_bottom: bool,
    has_triggered: bool,
    session_suppressed: bool,
}

impl ScrollGate {
    /// Builds a gate, seeding the latch from the session store so a
    /// fresh instance within the same session does not re-fire.
    pub fn new(config: GateConfig, store: Arc<dyn SessionStore>) -> Self {
        let suppressed = config.once_per_session
            && matches!(store.get(SUPPRESSION_KEY), Ok(Some(_)));
        Self {
            config,
            store,
            scroll_percentage: 0.0,
            near_bottom: false,
            has_triggered: suppressed,
            session_suppressed: suppressed,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn scroll_percentage(&self) -> f32 {
        self.scroll_percentage
    }

    pub fn is_near_bottom(&self) -> bool {
        self.near_bottom
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    /// Evaluates one (debounced) scroll sample. Returns `true` only
    /// when this evaluation newly latched the trigger, so the caller
    /// can mount the dependent prompt exactly once.
    pub fn evaluate(&mut self, metrics: ScrollMetrics) -> bool {
        let max_scroll = metrics.content_height - metrics.viewport_height;
        if max_scroll <= 0.0 {
            // Page is not scrollable; leave prior state untouched.
            return false;
        }

        let scroll_top = metrics.scroll_top.clamp(0.0, max_scroll);
        self.scroll_percentage = scroll_top / max_scroll;

        let pixels_from_bottom = max_scroll - scroll_top;
        let really_near_bottom = pixels_from_bottom <= self.config.bottom_tolerance
            || self.scroll_percentage >= self.config.threshold;
        // Guards against short pages where a tiny absolute distance is
        // a large fraction of the scrollable range.
        let sufficient_scroll = scroll_top >= self.config.min_scroll_distance;
        self.near_bottom = really_near_bottom && sufficient_scroll;

        if self.near_bottom
            && !self.has_triggered
            && (!self.config.once_per_session || !self.session_suppressed)
        {
            self.has_triggered = true;
            if self.config.once_per_session {
                self.session_suppressed = true;
                // A failed write degrades to in-memory suppression.
                let _ = self.store.set(SUPPRESSION_KEY, "1");
            }
            return true;
        }
        false
    }

    /// Re-arms the gate: clears the latch, the session flag and the
    /// persisted suppression key.
    pub fn reset_trigger(&mut self) {
        self.has_triggered = false;
        self.session_suppressed = false;
        let _ = self.store.remove(SUPPRESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MemoryStore;
    use anyhow::anyhow;

    /// Store whose every operation fails, to exercise degradation.
    #[derive(Debug)]
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }
        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("storage disabled"))
        }
        fn remove(&self, _key: &str) -> anyhow::Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    fn gate() -> ScrollGate {
        ScrollGate::new(GateConfig::default(), Arc::new(MemoryStore::new()))
    }

    fn metrics(scroll_top: f32) -> ScrollMetrics {
        // viewport 1000, content 6000 => max_scroll 5000
        ScrollMetrics::new(scroll_top, 1000.0, 6000.0)
    }

    #[test]
    fn fires_within_bottom_tolerance() {
        let mut gate = gate();
        // 40px from the bottom of a 5000px scrollable range.
        assert!(gate.evaluate(metrics(4960.0)));
        assert!(gate.is_near_bottom());
        assert!(gate.has_triggered());
    }

    #[test]
    fn ignores_small_scroll_distances() {
        let mut gate = gate();
        assert!(!gate.evaluate(metrics(1010.0)));
        assert!(!gate.is_near_bottom());
        assert!(!gate.has_triggered());
    }

    #[test]
    fn percentage_threshold_alone_is_enough() {
        let mut gate = gate();
        // 4400/5000 = 0.88 >= 0.85, 600px from the bottom.
        assert!(gate.evaluate(metrics(4400.0)));
    }

    #[test]
    fn min_scroll_distance_blocks_short_pages() {
        let mut gate = gate();
        // viewport 500, content 1100 => max_scroll 600; bottom reached
        // but the absolute distance is under 1000px.
        let m = ScrollMetrics::new(600.0, 500.0, 1100.0);
        assert!(!gate.evaluate(m));
        assert!(!gate.is_near_bottom());
    }

    #[test]
    fn non_scrollable_page_is_a_no_op() {
        let mut gate = gate();
        assert!(gate.evaluate(metrics(4960.0)));
        let before = gate.scroll_percentage();

        // Same-height content cannot scroll; prior state survives.
        assert!(!gate.evaluate(ScrollMetrics::new(9999.0, 800.0, 800.0)));
        assert!(gate.has_triggered());
        assert_eq!(gate.scroll_percentage(), before);
    }

    #[test]
    fn latch_fires_only_once() {
        let mut gate = gate();
        assert!(gate.evaluate(metrics(4960.0)));
        assert!(!gate.evaluate(metrics(4980.0)));
        assert!(gate.has_triggered());
    }

    #[test]
    fn fresh_instance_reads_session_suppression() {
        let store = Arc::new(MemoryStore::new());
        let mut first = ScrollGate::new(GateConfig::default(), store.clone());
        assert!(first.evaluate(metrics(4960.0)));

        let second = ScrollGate::new(GateConfig::default(), store);
        assert!(second.has_triggered());
        assert!(!second.is_near_bottom());
    }

    #[test]
    fn reset_allows_exactly_one_refire() {
        let store = Arc::new(MemoryStore::new());
        let mut gate = ScrollGate::new(GateConfig::default(), store.clone());
        assert!(gate.evaluate(metrics(4960.0)));

        gate.reset_trigger();
        assert!(!gate.has_triggered());
        assert_eq!(store.get(SUPPRESSION_KEY).unwrap(), None);

        assert!(gate.evaluate(metrics(4970.0)));
        assert!(!gate.evaluate(metrics(4990.0)));
    }

    #[test]
    fn once_per_session_disabled_skips_the_store() {
        let store = Arc::new(MemoryStore::new());
        let config = GateConfig {
            once_per_session: false,
            ..GateConfig::default()
        };
        let mut gate = ScrollGate::new(config, store.clone());
        assert!(gate.evaluate(metrics(4960.0)));
        assert_eq!(store.get(SUPPRESSION_KEY).unwrap(), None);
        // Still latched in memory.
        assert!(!gate.evaluate(metrics(4980.0)));
    }

    #[test]
    fn broken_store_degrades_to_in_memory() {
        let mut gate = ScrollGate::new(GateConfig::default(), Arc::new(BrokenStore));
        assert!(!gate.has_triggered());

        assert!(gate.evaluate(metrics(4960.0)));
        assert!(gate.has_triggered());
        assert!(!gate.evaluate(metrics(4980.0)));

        gate.reset_trigger();
        assert!(gate.evaluate(metrics(4960.0)));
    }
}
