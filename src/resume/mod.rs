//! Resume data model and the caller-owned editing session

pub mod record;
pub mod session;

pub use record::{Education, Experience, PersonalInfo, Project, ResumeRecord, SkillCategory};
pub use session::ResumeSession;
