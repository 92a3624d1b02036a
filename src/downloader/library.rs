use super::dto::VideoEntry;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;

const VIDEO_EXTENSION: &str = "mp4";

/// Lists the finished `.mp4` files in `dir`, sorted by name.
///
/// A directory that does not exist yet simply has no videos.
pub async fn list_videos(dir: &Path) -> io::Result<Vec<VideoEntry>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "video directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut videos = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_video = path
            .extension()
            .map(|ext| ext == VIDEO_EXTENSION)
            .unwrap_or(false);
        if !is_video || !entry.file_type().await?.is_file() {
            continue;
        }
        videos.push(VideoEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path: path.to_string_lossy().to_string(),
        });
    }

    videos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(videos)
}
