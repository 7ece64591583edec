//! Content registries
//!
//! The built-in registry is created once and never mutated. Renderers never
//! reach for it themselves; callers pass the slices they want rendered.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::records::{Feature, Statistic, TeamMember};

/// The three ordered record sequences of one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registry {
    pub features: Vec<Feature>,
    pub statistics: Vec<Statistic>,
    pub team_members: Vec<TeamMember>,
}

lazy_static! {
    static ref BUILTIN: Registry = Registry {
        features: vec![
            Feature::new(
                "◉",
                "Real-Time Scanning",
                "Every commit is audited against WCAG 2.2 standards automatically",
                "#4285f4",
            ),
            Feature::new(
                "✕",
                "Auto-Block Non-Compliant Code",
                "Prevent inaccessible code from reaching production",
                "#ea4335",
            ),
            Feature::new(
                "⚡",
                "CI/CD Integration",
                "Seamlessly works with GitHub, GitLab, Jenkins, and more",
                "#f4b400",
            ),
            Feature::new(
                "▦",
                "Sprint-Ready Reports",
                "Get actionable insights that fit your agile workflow",
                "#0F9D58",
            ),
            Feature::new(
                "✓",
                "Zero Accessibility Debt",
                "Ship inclusive products from day one, not after remediation",
                "#4285f4",
            ),
            Feature::new(
                "✓",
                "VPAT Automation",
                "Generate compliance documentation automatically",
                "#ea4335",
            ),
        ],
        statistics: vec![
            Statistic::new(
                "!",
                "95.9%",
                "of top sites fail WCAG compliance",
                "WebAIM, 2025",
                "#ea4335",
            ),
            Statistic::new(
                "↑",
                "300%+",
                "increase in web accessibility lawsuits (2023–2025)",
                "Accessibility.Works",
                "#f4b400",
            ),
            Statistic::new(
                "$",
                "$10K–$100K+",
                "annual cost of retrofitting accessibility",
                "Rivenburgh, 2025",
                "#0F9D58",
            ),
        ],
        team_members: vec![
            TeamMember::new(
                "Sarah Krueger",
                "Co-Founder",
                "images/team-member-1.jpg",
                "#4285f4",
            ),
            TeamMember::new(
                "Micah Rembrandt",
                "Technical Co-Founder",
                "images/team-member-2.jpg",
                "#ea4335",
            ),
            TeamMember::new(
                "Your Name",
                "Web Accessibility Expert",
                "images/team-member-3.jpg",
                "#0F9D58",
            ),
        ],
    };
}

impl Registry {
    /// The registry shipped with the page
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse a registry supplied from outside the binary.
    /// Missing arrays are treated as empty.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_builtin_sizes() {
        let registry = Registry::builtin();
        assert_eq!(registry.features.len(), 6);
        assert_eq!(registry.statistics.len(), 3);
        assert_eq!(registry.team_members.len(), 3);
    }

    #[test]
    fn test_builtin_colors_are_valid() {
        let registry = Registry::builtin();
        let colors = registry
            .features
            .iter()
            .map(|f| &f.color)
            .chain(registry.statistics.iter().map(|s| &s.color))
            .chain(registry.team_members.iter().map(|m| &m.color));
        for color in colors {
            assert!(Rgb::parse(color).is_some(), "bad builtin color {color}");
        }
    }

    #[test]
    fn test_from_json_partial() {
        let json = r##"{"teamMembers":[{"name":"A","role":"B","image":"a.png","color":"#000000"}]}"##;
        let registry = Registry::from_json(json).unwrap();
        assert!(registry.features.is_empty());
        assert!(registry.statistics.is_empty());
        assert_eq!(registry.team_members[0].name, "A");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Registry::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid registry"));
    }

    #[test]
    fn test_json_preserves_order() {
        let json = Registry::builtin().to_json().unwrap();
        let parsed = Registry::from_json(&json).unwrap();
        assert_eq!(&parsed, Registry::builtin());
    }
}
