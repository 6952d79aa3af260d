// Profile model: the service member's background and the structured results
// the generative service is asked to produce. Pure data, no behaviour.

pub mod interview;
pub mod profile;
pub mod roadmap;
pub mod translation;

pub use interview::{InterviewQuestion, QuestionType};
pub use profile::MilitaryProfile;
pub use roadmap::{CareerRoadmap, GapLevel};
pub use translation::SkillTranslation;
