use crate::request::headers::HttpHeaders;
use crate::server::config::Config;
use std::ffi::OsString;
use std::path::PathBuf;

/// The yt-dlp settings for one download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YtDlpOptions {
    pub quiet: bool,
    pub output_template: PathBuf,
    pub format: String,
    pub merge_output_format: String,
    pub http_headers: HttpHeaders,
}

impl YtDlpOptions {
    pub fn new(config: &Config, output_template: PathBuf, http_headers: HttpHeaders) -> Self {
        Self {
            quiet: config.quiet,
            output_template,
            format: config.format.clone(),
            merge_output_format: config.merge_output_format.clone(),
            http_headers,
        }
    }

    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.quiet {
            args.push(OsString::from("--quiet"));
        }
        args.push(OsString::from("-o"));
        args.push(self.output_template.clone().into_os_string());
        args.push(OsString::from("-f"));
        args.push(OsString::from(&self.format));
        args.push(OsString::from("--merge-output-format"));
        args.push(OsString::from(&self.merge_output_format));
        args.extend(self.http_headers.to_args());
        args
    }
}

/// Everything the backend needs to fetch one video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadJob {
    pub program: PathBuf,
    pub url: String,
    pub options: YtDlpOptions,
}

impl DownloadJob {
    pub fn args(&self) -> Vec<OsString> {
        let mut args = self.options.to_args();
        // URL last and after `--`, so a URL starting with '-' is never read as a flag.
        args.push(OsString::from("--"));
        args.push(OsString::from(&self.url));
        args
    }
}
