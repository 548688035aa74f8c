pub mod partner;
pub mod project;
