//! Session data models.
//!
//! Everything here lives only for the duration of a signed-in session and is
//! wiped on logout:
//! - [`User`] - the fabricated session user
//! - [`UploadedDocument`] - uploaded files and their processing status
//! - [`Skill`] - skills "extracted" from completed uploads
//! - [`JobMatch`] - the result of a job-description analysis
//! - [`Resume`] - generated resumes

mod document;
mod job_match;
mod resume;
mod skill;
mod user;

pub use document::{DocumentStatus, DocumentType, UploadedDocument};
pub use job_match::JobMatch;
pub use resume::{Resume, ResumeSection, SectionContent, SectionType};
pub use skill::{Skill, SkillCategory};
pub use user::User;
