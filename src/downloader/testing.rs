use super::error::DownloadError;
use super::options::DownloadJob;
use super::ytdlp::Backend;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// Records every job it is given instead of running yt-dlp.
#[derive(Default)]
pub struct RecordingBackend {
    jobs: Mutex<Vec<DownloadJob>>,
    fail: bool,
    delay: Option<Duration>,
}

impl RecordingBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn jobs(&self) -> Vec<DownloadJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn run(&self, job: &DownloadJob) -> Result<(), DownloadError> {
        self.jobs.lock().unwrap().push(job.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(DownloadError::Exited {
                code: Some(1),
                message: Some("ERROR: simulated failure".into()),
            });
        }
        Ok(())
    }
}
