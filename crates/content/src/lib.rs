//! Everymode page content
//!
//! Static registries of feature, statistic and team records, the pure mapping
//! from records to card markup, and the render-once lifecycle that mounts the
//! cards into a [`Page`].

pub mod color;
pub mod config;
pub mod error;
pub mod fragment;
pub mod lifecycle;
pub mod mount;
pub mod records;
pub mod registry;
pub mod render;

pub use color::{hex_to_rgb, Rgb};
pub use config::PageConfig;
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use lifecycle::{initialize, initialize_with_year, InitReport, Lifecycle};
pub use mount::{MemoryPage, MountPoint, Page};
pub use records::{Feature, Statistic, TeamMember};
pub use registry::Registry;
pub use render::{
    current_year, render_features, render_statistics, render_team, update_year, RenderReport,
    RenderStatus,
};
