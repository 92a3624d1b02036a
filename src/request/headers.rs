use super::constant::{COOKIE_HEADER, USER_AGENT_HEADER};
use std::ffi::OsString;

const ADD_HEADER_FLAG: &str = "--add-header";

/// Extra HTTP headers yt-dlp sends with every request it makes for a job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    entries: Vec<(&'static str, String)>,
}

impl HttpHeaders {
    pub fn new(cookie: String, user_agent: String) -> Self {
        let mut headers = Self::default();
        headers.insert(COOKIE_HEADER, cookie);
        headers.insert(USER_AGENT_HEADER, user_agent);
        headers
    }

    /// Empty values are dropped; a repeated name replaces the earlier value.
    pub fn insert(&mut self, name: &'static str, value: String) {
        self.entries.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        if !value.is_empty() {
            self.entries.push((name, value));
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn to_args(&self) -> Vec<OsString> {
        self.entries
            .iter()
            .flat_map(|(name, value)| {
                [
                    OsString::from(ADD_HEADER_FLAG),
                    OsString::from(format!("{name}:{value}")),
                ]
            })
            .collect()
    }
}
