pub mod cert_modal;
pub mod code_background;
pub mod footer;
pub mod navbar;
pub mod sections;
