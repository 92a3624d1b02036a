use super::error::DownloadError;
use super::options::DownloadJob;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;
use tracing::{info, warn};

/// Runs a download job to completion.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn run(&self, job: &DownloadJob) -> Result<(), DownloadError>;
}

#[derive(Clone, Copy)]
enum Pipe {
    Stdout,
    Stderr,
}

/// yt-dlp as a child process.
///
/// The child is waited on for as long as it takes. Output is forwarded to
/// the log line by line; the last stderr line becomes the failure message.
#[derive(Clone, Debug, Default)]
pub struct YtDlp;

#[async_trait]
impl Backend for YtDlp {
    async fn run(&self, job: &DownloadJob) -> Result<(), DownloadError> {
        let mut child = Command::new(&job.program)
            .args(job.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DownloadError::Spawn {
                program: job.program.clone(),
                source,
            })?;

        let (stdout, stderr) = take_pipes(&mut child).await?;
        let stdout = SplitStream::new(BufReader::new(stdout).split(b'\n'))
            .map(|line| (Pipe::Stdout, line));
        let stderr = SplitStream::new(BufReader::new(stderr).split(b'\n'))
            .map(|line| (Pipe::Stderr, line));
        let mut lines = stdout.merge(stderr);

        let mut last_error = None;
        while let Some((pipe, line)) = lines.next().await {
            let line = match line {
                Ok(bytes) => decode_line(&bytes),
                Err(e) => {
                    warn!(error = %e, "stopped reading yt-dlp output");
                    break;
                }
            };
            match pipe {
                Pipe::Stdout => info!(target: "yt-dlp", "{line}"),
                Pipe::Stderr => {
                    warn!(target: "yt-dlp", "{line}");
                    if !line.trim().is_empty() {
                        last_error = Some(line);
                    }
                }
            }
        }
        drop(lines);

        // The exit status alone decides the outcome.
        let status = child.wait().await?;
        if !status.success() {
            return Err(DownloadError::Exited {
                code: status.code(),
                message: last_error,
            });
        }
        Ok(())
    }
}

/// Takes both output pipes, killing and reaping the child if either is missing.
async fn take_pipes(child: &mut Child) -> Result<(ChildStdout, ChildStderr), DownloadError> {
    let stream = match (child.stdout.take(), child.stderr.take()) {
        (Some(stdout), Some(stderr)) => return Ok((stdout, stderr)),
        (None, _) => "stdout",
        (_, None) => "stderr",
    };
    if let Err(e) = child.kill().await {
        warn!(error = %e, "failed to kill yt-dlp");
    }
    Err(DownloadError::MissingPipe { stream })
}

/// yt-dlp echoes titles and file names, which are not always valid UTF-8.
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\r')
        .to_string()
}
