use std::net::{IpAddr, Ipv4Addr};

pub const CONFIG_PATH: &str = "config.json";
pub const SERVER_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const SERVER_PORT: u16 = 8000;
pub const YTDLP_PROGRAM: &str = "yt-dlp";
pub const VIDEO_DIR: &str = "Videos";
pub const NOTES_PATH: &str = "notes.json";
pub const DEFAULT_OUTPUT: &str = "lecture.mp4";
pub const FORMAT_SELECTOR: &str = "bestvideo+bestaudio/best";
pub const MERGE_OUTPUT_FORMAT: &str = "mp4";
pub const DOWNLOAD_FAILED: &str = "Download failed";
pub const CONFIG_SAVE_FAILED: &str = "Failed to save config";
pub const NOTE_SAVE_FAILED: &str = "Failed to save note";
pub const SUCCESS: &str = "success";
