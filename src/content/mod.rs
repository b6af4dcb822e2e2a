//! Static portfolio content: typed records, the built-in data set and view-only state.

pub(crate) mod data;
pub(crate) mod flip;
pub(crate) mod gradient;
pub(crate) mod model;

use std::path::Path;

use anyhow::Context as _;

use crate::content::model::{Achievement, FocusArea, HeroStat, Profile, Project, SkillCategory};
use crate::foundation::error::{BackdropError, BackdropResult};

/// Read-only source of portfolio content for a presentation layer.
pub trait ContentProvider {
    fn profile(&self) -> &Profile;
    fn projects(&self) -> &[Project];
    fn achievements(&self) -> &[Achievement];
    /// Categories in display order.
    fn skills(&self) -> &[SkillCategory];
    fn hero_stats(&self) -> &[HeroStat];
    fn focus_areas(&self) -> &[FocusArea];

    fn featured_projects(&self) -> Vec<&Project> {
        self.projects().iter().filter(|p| p.featured).collect()
    }

    fn skill_category(&self, label: &str) -> Option<&SkillCategory> {
        self.skills().iter().find(|c| c.label == label)
    }
}

/// Complete content set of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub hero_stats: Vec<HeroStat>,
    pub focus_areas: Vec<FocusArea>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub skills: Vec<SkillCategory>,
}

impl PortfolioContent {
    /// The content shipped with the page.
    pub fn builtin() -> Self {
        Self {
            profile: data::profile(),
            hero_stats: data::hero_stats(),
            focus_areas: data::focus_areas(),
            projects: data::projects(),
            achievements: data::achievements(),
            skills: data::skills(),
        }
    }

    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let content: Self = serde_json::from_str(s)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_path(path: &Path) -> BackdropResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read content '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> BackdropResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every project gradient resolves, focus levels are percentages and category labels
    /// are unique.
    pub fn validate(&self) -> BackdropResult<()> {
        for p in &self.projects {
            p.gradient
                .resolve()
                .map_err(|e| BackdropError::content(format!("project '{}': {e}", p.name)))?;
        }
        if let Some(area) = self.focus_areas.iter().find(|a| a.level > 100) {
            return Err(BackdropError::content(format!(
                "focus area '{}' has level {} (max 100)",
                area.name, area.level
            )));
        }
        for (i, c) in self.skills.iter().enumerate() {
            if self.skills[..i].iter().any(|o| o.label == c.label) {
                return Err(BackdropError::content(format!(
                    "duplicate skill category '{}'",
                    c.label
                )));
            }
        }
        Ok(())
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentProvider for PortfolioContent {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }

    fn hero_stats(&self) -> &[HeroStat] {
        &self.hero_stats
    }

    fn focus_areas(&self) -> &[FocusArea] {
        &self.focus_areas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/provider.rs"]
mod tests;
