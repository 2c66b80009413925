//! UI drawing module
//!
//! - `components`: header and footer
//! - `panels`: request line, editor tabs, response pane
//! - `modals`: import path and alert dialogs
//! - `styling`: method colors and the light/dark palettes

mod components;
mod modals;
mod panels;
mod styling;

pub use components::{SPINNER, render_footer, render_header};
pub use modals::{render_alert_modal, render_import_path_modal};
pub use panels::{render_editor, render_request_line, render_response};
pub use styling::Palette;
