//! Render-once page initialization

use std::cell::Cell;

use tracing::info;

use crate::config::PageConfig;
use crate::mount::Page;
use crate::registry::Registry;
use crate::render::{
    current_year, render_features, render_statistics, render_team, update_year, RenderReport,
};

/// Outcome of one initialization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub features: RenderReport,
    pub statistics: RenderReport,
    pub team: RenderReport,
    pub year_updated: bool,
}

/// Render all content blocks and the footer year, in that order.
/// Each step runs regardless of how the previous one went.
pub fn initialize(page: &mut dyn Page, registry: &Registry, config: &PageConfig) -> InitReport {
    initialize_with_year(page, registry, config, current_year())
}

/// [`initialize`] with an explicit year instead of the system clock
pub fn initialize_with_year(
    page: &mut dyn Page,
    registry: &Registry,
    config: &PageConfig,
    year: i32,
) -> InitReport {
    info!("Everymode: Initializing dynamic content...");

    let features = render_features(page, &config.features_mount, &registry.features);
    let statistics = render_statistics(page, &config.stats_mount, &registry.statistics);
    let team = render_team(page, &config.team_mount, &registry.team_members);
    let year_updated = update_year(page, &config.year_mount, year);

    info!("Everymode: Dynamic content generation complete");

    InitReport {
        features,
        statistics,
        team,
        year_updated,
    }
}

/// One-shot guard around [`initialize`] for a single page load
#[derive(Debug, Default)]
pub struct Lifecycle {
    fired: Cell<bool>,
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            fired: Cell::new(false),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Run [`initialize`] the first time; later calls return `None`
    pub fn fire(
        &self,
        page: &mut dyn Page,
        registry: &Registry,
        config: &PageConfig,
    ) -> Option<InitReport> {
        if self.fired.replace(true) {
            return None;
        }
        Some(initialize(page, registry, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::MemoryPage;
    use crate::render::RenderStatus;

    #[test]
    fn test_fire_once() {
        let lifecycle = Lifecycle::new();
        let mut page = MemoryPage::new().with_mount("features-container");
        let registry = Registry::builtin();
        let config = PageConfig::default();

        assert!(lifecycle.fire(&mut page, registry, &config).is_some());
        assert!(lifecycle.has_fired());
        assert!(lifecycle.fire(&mut page, registry, &config).is_none());
    }

    #[test]
    fn test_missing_mounts_do_not_stop_others() {
        let mut page = MemoryPage::new().with_mount("team-container").with_text("year", "");
        let report =
            initialize_with_year(&mut page, Registry::builtin(), &PageConfig::default(), 2025);

        assert_eq!(report.features.status, RenderStatus::Absent);
        assert_eq!(report.statistics.status, RenderStatus::Absent);
        assert_eq!(report.team.status, RenderStatus::Rendered(3));
        assert!(report.year_updated);
    }
}
