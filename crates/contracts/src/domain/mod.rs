pub mod common;
pub mod partner;
pub mod project;
