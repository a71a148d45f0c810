pub mod config;
pub mod inspect;
pub mod next;
pub mod project;
