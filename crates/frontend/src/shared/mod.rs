pub mod charts;
pub mod components;
pub mod data;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod toast;
