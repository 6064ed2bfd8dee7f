pub mod health_controller;
pub mod skill_controller;
