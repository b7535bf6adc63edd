pub mod fade_in_tracker;
pub mod file_list;
pub mod folder;
pub mod modal_visibility;
pub mod navbar_style;
pub mod scroll_anchor;
