pub mod navbar_status;
pub mod sidebar;
