pub mod adjustable_slider;
pub mod app;
pub mod balance_panel;
pub mod shop_section;
pub mod tasks_section;
pub mod vote_counter;
