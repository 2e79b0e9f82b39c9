// src/ui/widgets/mod.rs

// One module per screen area; each exposes a `render_*` function.
pub mod footer;
pub mod help_popup;
pub mod host_detail;
pub mod host_list;
pub mod input;
pub mod log_view;
pub mod summary;
