//! Server-held screen state: the shared profile, one request slot per screen
//! and the interview simulator session.
//!
//! Single user per process. Nothing here outlives the process.

use tokio::sync::RwLock;

use crate::gateway::handlers::{InterviewStartRequest, OptimizeResumeRequest, RoadmapRequest};
use crate::models::{CareerRoadmap, InterviewQuestion, MilitaryProfile, SkillTranslation};

pub mod handlers;
pub mod interview;
pub mod profile_store;
pub mod screen;

pub use interview::{InterviewSession, SessionError, SessionView};
pub use profile_store::{ProfileRecord, ProfileStore};
pub use screen::{ScreenBusy, ScreenSlot};

pub const SCREEN_NAMES: [&str; 4] = ["translator", "resume", "roadmap", "interview"];

/// Request slots for the four feature screens.
#[derive(Debug)]
pub struct Screens {
    pub translator: ScreenSlot<MilitaryProfile, SkillTranslation>,
    pub resume: ScreenSlot<OptimizeResumeRequest, String>,
    pub roadmap: ScreenSlot<RoadmapRequest, CareerRoadmap>,
    pub interview: ScreenSlot<InterviewStartRequest, Vec<InterviewQuestion>>,
    /// The running practice session, if one was started.
    pub interview_session: RwLock<Option<InterviewSession>>,
}

impl Screens {
    pub fn new() -> Self {
        Self {
            translator: ScreenSlot::new(SCREEN_NAMES[0]),
            resume: ScreenSlot::new(SCREEN_NAMES[1]),
            roadmap: ScreenSlot::new(SCREEN_NAMES[2]),
            interview: ScreenSlot::new(SCREEN_NAMES[3]),
            interview_session: RwLock::new(None),
        }
    }
}
