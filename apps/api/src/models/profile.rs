use std::fmt;

use serde::{Deserialize, Serialize};

/// Service branch of a military profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    #[default]
    Army,
    Navy,
    #[serde(rename = "Air Force")]
    AirForce,
    #[serde(rename = "Marine Corps")]
    MarineCorps,
    #[serde(rename = "Coast Guard")]
    CoastGuard,
    #[serde(rename = "Space Force")]
    SpaceForce,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Army => "Army",
            Branch::Navy => "Navy",
            Branch::AirForce => "Air Force",
            Branch::MarineCorps => "Marine Corps",
            Branch::CoastGuard => "Coast Guard",
            Branch::SpaceForce => "Space Force",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service member's background as entered in the skill translator form.
///
/// Passed by value into the gateway, which never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilitaryProfile {
    pub branch: Branch,
    /// MOS (Army/Marines), rate (Navy/Coast Guard) or AFSC code, e.g. "25B".
    pub mos_code: String,
    pub mos_title: String,
    pub years_of_service: u32,
    #[serde(default)]
    pub leadership_scope: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
}
