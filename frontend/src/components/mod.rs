pub mod error_boundary;
pub mod navbar;
pub mod footer;
pub mod loading_skeleton;
pub mod ai_chat;
pub mod expert_components;
