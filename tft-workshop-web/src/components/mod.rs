pub mod comments;
pub mod nav;
pub mod quiz;
pub mod username_modal;
