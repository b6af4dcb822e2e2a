use crate::content::gradient::GradientSpec;

/// Owner of the portfolio.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// A showcased project. Links are opaque strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Technology tags in display order.
    pub tech: Vec<String>,
    pub github: String,
    pub live: String,
    pub featured: bool,
    pub gradient: GradientSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Achievement {
    pub title: String,
    /// Placement or result, e.g. "Winner".
    pub position: String,
    pub organizer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A labelled, ordered group of skills.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

/// Headline number of the hero banner, e.g. "5+" / "Hackathon Wins".
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

/// A focus area with a proficiency level in percent.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusArea {
    pub name: String,
    pub level: u8,
}
