pub mod dto;
pub mod error;
pub mod library;
pub mod manager;
pub mod options;
pub mod output;
pub mod ytdlp;

#[cfg(test)]
pub mod testing;
