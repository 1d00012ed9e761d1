pub mod achievements;
pub mod activity;
pub mod header;
pub mod history;
pub mod stat_cards;
pub mod statusbar;
