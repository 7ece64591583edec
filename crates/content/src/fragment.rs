//! Record to markup mapping
//!
//! Pure functions: one [`Fragment`] per record, in record order. Nothing here
//! touches a page; see [`crate::mount::Page`] for that.

use std::fmt::Write as _;

use crate::color::hex_to_rgb;
use crate::records::{Feature, Statistic, TeamMember};

/// Background alpha behind feature icons
const FEATURE_ICON_ALPHA: &str = "0.15";
/// Background alpha behind statistic icons
const STAT_ICON_ALPHA: &str = "0.1";

/// One generated card, as the element to append and its inner markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tag: &'static str,
    pub class: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub inner_html: String,
}

impl Fragment {
    fn article(class: &'static str, inner_html: String) -> Self {
        Self {
            tag: "article",
            class,
            attributes: Vec::new(),
            inner_html,
        }
    }

    #[must_use]
    fn with_attribute(mut self, name: &'static str, value: &str) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    /// Serialize as a complete element (used by string-backed pages)
    pub fn outer_html(&self) -> String {
        let mut html = format!("<{} class=\"{}\"", self.tag, self.class);
        for (name, value) in &self.attributes {
            let _ = write!(html, " {name}=\"{}\"", escape(value));
        }
        let _ = write!(html, ">{}</{}>", self.inner_html, self.tag);
        html
    }
}

/// Escape text for element content and double-quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Icon badge shared by feature and statistic cards
fn icon_badge(class: &str, icon: &str, color: &str, alpha: &str) -> String {
    format!(
        "<div class=\"{class}\" aria-hidden=\"true\" style=\"background: rgba({}, {alpha}); color: {};\">{}</div>",
        hex_to_rgb(color),
        escape(color),
        escape(icon),
    )
}

pub fn feature_fragment(feature: &Feature) -> Fragment {
    let html = format!(
        "{}<h3>{}</h3><p>{}</p>",
        icon_badge("feature-icon", &feature.icon, &feature.color, FEATURE_ICON_ALPHA),
        escape(&feature.title),
        escape(&feature.description),
    );
    Fragment::article("feature-card", html)
}

pub fn statistic_fragment(stat: &Statistic) -> Fragment {
    let html = format!(
        "{}<div class=\"stat-value\">{}</div><div class=\"stat-label\">{}</div><div class=\"stat-source\">{}</div>",
        icon_badge("stat-icon", &stat.icon, &stat.color, STAT_ICON_ALPHA),
        escape(&stat.value),
        escape(&stat.label),
        escape(&stat.source),
    );
    Fragment::article("stat-card", html)
}

/// Team cards carry no color styling; `color` is kept on the record only.
pub fn team_fragment(member: &TeamMember) -> Fragment {
    let html = format!(
        "<img src=\"{}\" alt=\"\" /><div class=\"team-card-content\"><h3>{}</h3><p>{}</p></div>",
        escape(&member.image),
        escape(&member.name),
        escape(&member.role),
    );
    Fragment::article("team-card", html).with_attribute("role", "listitem")
}

pub fn feature_fragments(features: &[Feature]) -> Vec<Fragment> {
    features.iter().map(feature_fragment).collect()
}

pub fn statistic_fragments(stats: &[Statistic]) -> Vec<Fragment> {
    stats.iter().map(statistic_fragment).collect()
}

pub fn team_fragments(members: &[TeamMember]) -> Vec<Fragment> {
    members.iter().map(team_fragment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_feature_fragment_markup() {
        let frag = feature_fragment(&Feature::new("◉", "Scan", "Audits", "#4285f4"));
        assert_eq!(frag.tag, "article");
        assert_eq!(frag.class, "feature-card");
        assert!(frag
            .inner_html
            .contains("style=\"background: rgba(66, 133, 244, 0.15); color: #4285f4;\""));
        assert!(frag.inner_html.contains(">◉</div>"));
        assert!(frag.inner_html.contains("<h3>Scan</h3><p>Audits</p>"));
    }

    #[test]
    fn test_statistic_fragment_uses_lighter_alpha() {
        let frag = statistic_fragment(&Statistic::new("!", "95.9%", "fail", "WebAIM", "#ea4335"));
        assert_eq!(frag.class, "stat-card");
        assert!(frag.inner_html.contains("rgba(234, 67, 53, 0.1)"));
        assert!(frag.inner_html.contains("<div class=\"stat-value\">95.9%</div>"));
        assert!(frag.inner_html.contains("<div class=\"stat-source\">WebAIM</div>"));
    }

    #[test]
    fn test_team_fragment_is_list_item() {
        let frag = team_fragment(&TeamMember::new("Ada", "Founder", "images/a.jpg", "#000000"));
        assert_eq!(frag.attributes, vec![("role", "listitem".to_string())]);
        assert!(frag.inner_html.starts_with("<img src=\"images/a.jpg\" alt=\"\" />"));
        assert_eq!(
            frag.outer_html(),
            format!("<article class=\"team-card\" role=\"listitem\">{}</article>", frag.inner_html)
        );
    }

    #[test]
    fn test_malformed_color_renders_black() {
        let frag = feature_fragment(&Feature::new("x", "t", "d", "blue"));
        assert!(frag.inner_html.contains("rgba(0, 0, 0, 0.15)"));
    }

    #[test]
    fn test_text_is_escaped() {
        let frag = feature_fragment(&Feature::new("<b>", "A & B", "\"quoted\"", "#000000"));
        assert!(frag.inner_html.contains("&lt;b&gt;"));
        assert!(frag.inner_html.contains("<h3>A &amp; B</h3>"));
        assert!(frag.inner_html.contains("<p>&quot;quoted&quot;</p>"));
    }

    #[test]
    fn test_builtin_text_is_verbatim() {
        let registry = Registry::builtin();
        let fragments = statistic_fragments(&registry.statistics);
        for (stat, frag) in registry.statistics.iter().zip(fragments) {
            assert!(frag.inner_html.contains(&stat.value));
            assert!(frag.inner_html.contains(&stat.label));
        }
    }

    #[test]
    fn test_order_preserved() {
        let features = &Registry::builtin().features;
        let frags = feature_fragments(features);
        assert_eq!(frags.len(), features.len());
        for (feature, frag) in features.iter().zip(&frags) {
            assert!(frag.inner_html.contains(&format!("<h3>{}</h3>", feature.title)));
        }
    }
}
