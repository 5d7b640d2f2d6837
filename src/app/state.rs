use crate::config::AppConfig;
use crate::counter::TimeCounter;
use std::collections::BTreeMap;
use tokio::sync::watch;

/// Boolean busy flags for named UI regions.
///
/// Writes go through [`LoadingRegistry::activate`] and
/// [`LoadingRegistry::deactivate`]; unknown region names are created on first
/// write. Every write that changes a stored value bumps a version counter
/// observable through [`LoadingRegistry::subscribe`], so a rendering layer can
/// redraw on change instead of polling.
pub struct LoadingRegistry {
    flags: BTreeMap<String, bool>,
    changes: watch::Sender<u64>,
}

impl LoadingRegistry {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            flags: BTreeMap::new(),
            changes,
        }
    }

    /// Seed the registry from `(name, busy)` pairs.
    pub fn with_regions<I>(regions: I) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        let mut registry = Self::new();
        for (name, busy) in regions {
            registry.flags.insert(name, busy);
        }
        registry
    }

    pub fn activate(&mut self, name: &str) {
        self.set(name, true);
    }

    pub fn deactivate(&mut self, name: &str) {
        self.set(name, false);
    }

    fn set(&mut self, name: &str, busy: bool) {
        if self.flags.insert(name.to_string(), busy) != Some(busy) {
            self.changes.send_modify(|version| *version += 1);
        }
    }

    /// Current flag for `name`; false for names never written.
    pub fn is_loading(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn any_loading(&self) -> bool {
        self.flags.values().any(|busy| *busy)
    }

    /// Names of the regions currently busy, in key order.
    pub fn busy_regions(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|(_, busy)| **busy)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Change notifications: the received value is a version counter that
    /// increases whenever a write changes a stored flag.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}

impl Default for LoadingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub loading: LoadingRegistry,
    pub counter: TimeCounter,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the driver state from config. `start_time` overrides the
    /// config's session start timestamp when present.
    pub fn new(config: AppConfig, start_time: Option<String>) -> Self {
        let loading = LoadingRegistry::with_regions(
            config
                .regions
                .iter()
                .map(|region| (region.name.clone(), region.busy)),
        );
        let start_time = start_time.or_else(|| config.session.start_time.clone());
        Self {
            config,
            loading,
            counter: TimeCounter::new(start_time),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_regions_before_any_mutation() {
        let state = AppState::new(AppConfig::default(), None);
        assert!(state.loading.is_loading("timer"));
        assert!(state.loading.is_loading("reports"));
        assert!(!state.loading.is_loading("loading_bar"));
    }

    #[test]
    fn last_write_wins() {
        let mut registry = LoadingRegistry::new();
        registry.activate("reports");
        registry.deactivate("reports");
        registry.activate("reports");
        registry.deactivate("reports");
        assert!(!registry.is_loading("reports"));
    }

    #[test]
    fn unseen_region_reads_as_idle() {
        let registry = LoadingRegistry::new();
        assert!(!registry.is_loading("no_such_region"));
    }

    #[test]
    fn writes_create_unknown_regions() {
        let mut registry = LoadingRegistry::new();
        registry.activate("sidebar");
        assert!(registry.is_loading("sidebar"));
        assert_eq!(registry.busy_regions(), vec!["sidebar"]);
    }

    #[test]
    fn busy_regions_are_sorted_by_name() {
        let mut registry = LoadingRegistry::new();
        registry.activate("timer");
        registry.activate("loading_bar");
        registry.activate("reports");
        assert_eq!(
            registry.busy_regions(),
            vec!["loading_bar", "reports", "timer"]
        );
    }

    #[test]
    fn notifies_only_on_value_transitions() {
        let mut registry = LoadingRegistry::new();
        let receiver = registry.subscribe();

        registry.activate("timer");
        assert_eq!(*receiver.borrow(), 1);

        // Same value again: no notification.
        registry.activate("timer");
        assert_eq!(*receiver.borrow(), 1);

        registry.deactivate("timer");
        assert_eq!(*receiver.borrow(), 2);
    }

    #[test]
    fn any_loading_tracks_all_flags() {
        let mut registry =
            LoadingRegistry::with_regions([("timer".to_string(), true)]);
        assert!(registry.any_loading());
        registry.deactivate("timer");
        assert!(!registry.any_loading());
    }
}
