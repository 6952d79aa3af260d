use serde::{Deserialize, Serialize};

/// One stage of a career path, e.g. "Months 0-6".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub period: String,
    pub objective: String,
    pub action_items: Vec<String>,
    pub milestone: String,
    /// Display string such as "$85,000"; not parsed as currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_salary: Option<String>,
}

/// Severity of a missing civilian-equivalent skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapLevel {
    Low,
    Medium,
    High,
}

impl GapLevel {
    pub const NAMES: [&'static str; 3] = ["Low", "Medium", "High"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub gap_level: GapLevel,
    pub recommendation: String,
}

/// Two- and five-year transition plan with a skill gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmap {
    pub two_year_path: Vec<RoadmapStep>,
    pub five_year_path: Vec<RoadmapStep>,
    pub skill_gap_analysis: Vec<SkillGap>,
    /// 0.0 – 1.0
    pub confidence: f64,
}
