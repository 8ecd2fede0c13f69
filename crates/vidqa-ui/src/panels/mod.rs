pub mod compose;
pub mod conversation;
pub mod sidebar;
