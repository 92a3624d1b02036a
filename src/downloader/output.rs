use super::error::DownloadError;
use crate::server::config::Config;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Extension placeholder filled in by yt-dlp once it picks the container.
pub const EXTENSION_PLACEHOLDER: &str = "%(ext)s";

/// Resolves the yt-dlp output template for a request.
///
/// Without a name the fixed default file is used. With one, the video
/// directory is created if missing and the template becomes
/// `<video_dir>/<name>.%(ext)s`. The name is not sanitized.
pub async fn resolve_output(
    output_path: Option<&str>,
    config: &Config,
) -> Result<PathBuf, DownloadError> {
    let name = match output_path {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Ok(config.default_output.clone()),
    };

    fs::create_dir_all(&config.video_dir)
        .await
        .map_err(|source| DownloadError::OutputDir {
            path: config.video_dir.clone(),
            source,
        })?;
    debug!(dir = %config.video_dir.display(), "video directory ready");

    Ok(config
        .video_dir
        .join(format!("{name}.{EXTENSION_PLACEHOLDER}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_in(dir: &Path) -> Config {
        Config {
            video_dir: dir.join("Videos"),
            ..Config::new()
        }
    }

    #[tokio::test]
    async fn named_output_goes_into_video_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let template = resolve_output(Some("Lecture 1"), &config).await.unwrap();

        assert_eq!(template, tmp.path().join("Videos").join("Lecture 1.%(ext)s"));
        assert!(tmp.path().join("Videos").is_dir());
    }

    #[tokio::test]
    async fn existing_directory_is_reused() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        std::fs::create_dir(&config.video_dir).unwrap();
        std::fs::write(config.video_dir.join("keep.mp4"), b"x").unwrap();

        resolve_output(Some("Lecture 2"), &config).await.unwrap();
        resolve_output(Some("Lecture 2"), &config).await.unwrap();

        assert!(config.video_dir.join("keep.mp4").exists());
    }

    #[tokio::test]
    async fn missing_or_blank_name_uses_default_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        assert_eq!(
            resolve_output(None, &config).await.unwrap(),
            PathBuf::from("lecture.mp4")
        );
        assert_eq!(
            resolve_output(Some("  "), &config).await.unwrap(),
            PathBuf::from("lecture.mp4")
        );
        assert!(!config.video_dir.exists());
    }

    #[tokio::test]
    async fn unusable_directory_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("Videos");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = config_in(tmp.path());

        let err = resolve_output(Some("Lecture 3"), &config).await.unwrap_err();

        assert!(matches!(err, DownloadError::OutputDir { .. }));
    }
}
