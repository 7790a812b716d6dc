pub mod affordances;
pub mod content;
pub mod menu;
