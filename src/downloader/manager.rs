use super::dto::DownloadRequest;
use super::error::DownloadError;
use super::options::{DownloadJob, YtDlpOptions};
use super::output::resolve_output;
use super::ytdlp::Backend;
use crate::request::cookie::cookie_header;
use crate::request::headers::HttpHeaders;
use crate::server::config::Config;
use std::sync::Arc;
use tracing::{debug, error, info};
use url::Url;

#[derive(Clone)]
pub struct Downloader {
    backend: Arc<dyn Backend>,
    config: Config,
}

impl Downloader {
    pub fn new(backend: Arc<dyn Backend>, config: &Config) -> Self {
        Self {
            backend,
            config: config.clone(),
        }
    }

    /// Runs one download attempt. Every failure is logged and reported as `false`.
    pub async fn download_video(&self, request: &DownloadRequest) -> bool {
        let host = host_of(&request.video_url);
        match self.try_download(request).await {
            Ok(job) => {
                info!(
                    host = %host,
                    output = %job.options.output_template.display(),
                    "download finished"
                );
                true
            }
            Err(e) => {
                error!(host = %host, error = %e, "download failed");
                false
            }
        }
    }

    /// Builds the job for a request, creating the video directory if needed.
    pub async fn prepare(&self, request: &DownloadRequest) -> Result<DownloadJob, DownloadError> {
        let user_agent = self.config.user_agent.or_requested(&request.user_agent);
        debug!(
            user_agent = %user_agent,
            cookies = request.cookies.len(),
            "using browser session"
        );

        let headers = HttpHeaders::new(cookie_header(&request.cookies), user_agent);
        let template = resolve_output(request.output_path.as_deref(), &self.config).await?;

        Ok(DownloadJob {
            program: self.config.ytdlp_path.clone(),
            url: request.video_url.clone(),
            options: YtDlpOptions::new(&self.config, template, headers),
        })
    }

    async fn try_download(&self, request: &DownloadRequest) -> Result<DownloadJob, DownloadError> {
        let job = self.prepare(request).await?;
        info!(
            host = %host_of(&job.url),
            output = %job.options.output_template.display(),
            "starting download"
        );
        self.backend.run(&job).await?;
        Ok(job)
    }
}

fn host_of(video_url: &str) -> String {
    Url::parse(video_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .unwrap_or_else(|| "unknown".to_string())
}
