pub mod skill_service;

pub use skill_service::{RecordError, SkillService};
