pub mod progress_bar;
pub mod select;
pub mod stat_card;
pub mod tab_bar;

pub use progress_bar::ProgressBar;
pub use select::{plain_options, Select};
pub use stat_card::StatCard;
pub use tab_bar::TabBar;
