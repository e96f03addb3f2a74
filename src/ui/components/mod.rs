pub mod about;
pub mod answer_slots;
pub mod hint_panel;
pub mod keypad;
pub mod menu;
pub mod overlay;
pub mod powerup_bar;
pub mod ranking_table;
pub mod timer_bar;
