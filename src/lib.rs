pub mod api;
pub mod config;
pub mod contact;
pub mod form;
pub mod scroll;
pub mod typewriter;
