//! Record types shown on the page
//!
//! All three kinds are plain display data. `color` is expected to be a
//! 6-hex-digit code (`#4285f4` or `4285f4`); anything else renders with the
//! black fallback from [`crate::color::hex_to_rgb`].

use serde::{Deserialize, Serialize};

/// A product feature card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str, color: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            color: color.to_string(),
        }
    }
}

/// A headline statistic with its citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub icon: String,
    /// Already formatted for display (`95.9%`, `$10K–$100K+`)
    pub value: String,
    pub label: String,
    pub source: String,
    pub color: String,
}

impl Statistic {
    pub fn new(icon: &str, value: &str, label: &str, source: &str, color: &str) -> Self {
        Self {
            icon: icon.to_string(),
            value: value.to_string(),
            label: label.to_string(),
            source: source.to_string(),
            color: color.to_string(),
        }
    }
}

/// A team member card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Opaque image path, resolved by the browser
    pub image: String,
    pub color: String,
}

impl TeamMember {
    pub fn new(name: &str, role: &str, image: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            image: image.to_string(),
            color: color.to_string(),
        }
    }
}
