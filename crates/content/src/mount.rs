//! The page boundary
//!
//! Every mutation of page structure goes through [`Page`]. The browser
//! implementation lives in the UI crate; [`MemoryPage`] serves native hosts
//! and tests.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::fragment::Fragment;

/// A document with named mounting points
pub trait Page {
    /// Clear the mounting point and append one element per fragment, in order
    fn replace_children(&mut self, id: &str, fragments: &[Fragment]) -> Result<()>;

    /// Replace the text content of an element
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;
}

/// Content of one mounting point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPoint {
    pub children: Vec<Fragment>,
    pub text: Option<String>,
}

impl MountPoint {
    /// Inner markup as a browser would serialize it
    pub fn inner_html(&self) -> String {
        if self.children.is_empty() {
            return self.text.clone().unwrap_or_default();
        }
        self.children.iter().map(Fragment::outer_html).collect()
    }
}

/// In-memory page. Mounting points must be declared; none are created on write.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    mounts: HashMap<String, MountPoint>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an empty mounting point
    #[must_use]
    pub fn with_mount(mut self, id: &str) -> Self {
        self.mounts.insert(id.to_string(), MountPoint::default());
        self
    }

    /// Declare a mounting point holding placeholder text
    #[must_use]
    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.mounts.insert(
            id.to_string(),
            MountPoint {
                children: Vec::new(),
                text: Some(text.to_string()),
            },
        );
        self
    }

    pub fn get(&self, id: &str) -> Option<&MountPoint> {
        self.mounts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.mounts.contains_key(id)
    }

    fn mount_mut(&mut self, id: &str) -> Result<&mut MountPoint> {
        self.mounts.get_mut(id).ok_or_else(|| Error::mount_not_found(id))
    }
}

impl Page for MemoryPage {
    fn replace_children(&mut self, id: &str, fragments: &[Fragment]) -> Result<()> {
        let mount = self.mount_mut(id)?;
        mount.text = None;
        mount.children = fragments.to_vec();
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        let mount = self.mount_mut(id)?;
        mount.children.clear();
        mount.text = Some(text.to_string());
        Ok(())
    }
}
