pub mod config;
pub mod constant;
pub mod controller;
pub mod rejection;
pub mod reply;
pub mod runner;
