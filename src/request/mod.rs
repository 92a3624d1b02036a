pub mod constant;
pub mod cookie;
pub mod headers;
pub mod user_agent;
