pub mod error;

// Star catalog parsing and placement
pub mod catalog;
