pub mod dto;
pub mod store;
