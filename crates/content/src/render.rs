//! Card renderers and the footer year updater
//!
//! A renderer maps its records to fragments and mounts them. A missing
//! mounting point stops that renderer only; nothing is propagated.

use chrono::Datelike;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::fragment::{feature_fragments, statistic_fragments, team_fragments, Fragment};
use crate::mount::Page;
use crate::records::{Feature, Statistic, TeamMember};

/// What happened at one mounting point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// Content replaced with this many fragments
    Rendered(usize),
    /// The mounting point is not on the page
    Absent,
    /// The host refused the mutation
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub mount: String,
    pub status: RenderStatus,
}

impl RenderReport {
    pub const fn rendered(&self) -> Option<usize> {
        match self.status {
            RenderStatus::Rendered(n) => Some(n),
            _ => None,
        }
    }
}

/// How a renderer treats an absent mounting point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mount {
    Required,
    Optional,
}

fn mount_cards(
    page: &mut dyn Page,
    id: &str,
    fragments: &[Fragment],
    requirement: Mount,
    label: &str,
    kind: &str,
) -> RenderReport {
    let status = match page.replace_children(id, fragments) {
        Ok(()) => {
            info!("Generated {} {kind} cards", fragments.len());
            RenderStatus::Rendered(fragments.len())
        }
        Err(e) if e.is_missing_mount() => {
            match requirement {
                Mount::Required => error!(mount = id, "{label} container not found"),
                Mount::Optional => {
                    debug!(mount = id, "{label} container not found (may not be on this page)");
                }
            }
            RenderStatus::Absent
        }
        Err(e) => {
            error!(mount = id, "Failed to render {kind} cards: {e}");
            RenderStatus::Failed(e.to_string())
        }
    };

    RenderReport {
        mount: id.to_string(),
        status,
    }
}

/// Render feature cards. The mounting point is required.
pub fn render_features(page: &mut dyn Page, id: &str, features: &[Feature]) -> RenderReport {
    let fragments = feature_fragments(features);
    mount_cards(page, id, &fragments, Mount::Required, "Features", "feature")
}

/// Render statistic cards. The mounting point is required.
pub fn render_statistics(page: &mut dyn Page, id: &str, stats: &[Statistic]) -> RenderReport {
    let fragments = statistic_fragments(stats);
    mount_cards(page, id, &fragments, Mount::Required, "Statistics", "statistic")
}

/// Render team cards. Pages without a team section are normal.
pub fn render_team(page: &mut dyn Page, id: &str, members: &[TeamMember]) -> RenderReport {
    let fragments = team_fragments(members);
    mount_cards(page, id, &fragments, Mount::Optional, "Team", "team")
}

/// Current calendar year from the system clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Write `year` into the footer placeholder. Returns false if it is absent.
pub fn update_year(page: &mut dyn Page, id: &str, year: i32) -> bool {
    match page.set_text(id, &year.to_string()) {
        Ok(()) => true,
        Err(Error::MountNotFound { .. }) => false,
        Err(e) => {
            error!(mount = id, "Failed to update year: {e}");
            false
        }
    }
}
