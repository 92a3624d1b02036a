use super::config::{create_shared_config, Config, SharedConfig};
use super::constant::{CONFIG_SAVE_FAILED, DOWNLOAD_FAILED, NOTE_SAVE_FAILED};
use super::reply;
use crate::downloader::dto::{DownloadRequest, VideoEntry};
use crate::downloader::library;
use crate::downloader::manager::Downloader;
use crate::downloader::ytdlp::Backend;
use crate::notes::dto::{NoteQuery, NoteRequest};
use crate::notes::store::NoteStore;
use serde_json::json;
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

/// State shared by every route.
#[derive(Clone)]
pub struct AppContext {
    pub config: SharedConfig,
    pub config_path: Arc<PathBuf>,
    pub backend: Arc<dyn Backend>,
    pub notes: Arc<NoteStore>,
    /// Video directory at startup; `/media` keeps serving it until restart.
    pub media_dir: Arc<PathBuf>,
}

impl AppContext {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        backend: Arc<dyn Backend>,
        notes: NoteStore,
    ) -> Self {
        Self {
            media_dir: Arc::new(config.video_dir.clone()),
            config: create_shared_config(config),
            config_path: Arc::new(config_path),
            backend,
            notes: Arc::new(notes),
        }
    }
}

pub fn with_context(
    context: AppContext,
) -> impl Filter<Extract = (AppContext,), Error = Infallible> + Clone {
    warp::any().map(move || context.clone())
}

pub async fn start_download(
    request: DownloadRequest,
    context: AppContext,
) -> Result<Response, Infallible> {
    // Cloned so the lock is not held for the length of the download.
    let config = context.config.read().await.clone();
    let downloader = Downloader::new(context.backend.clone(), &config);

    if downloader.download_video(&request).await {
        Ok(reply::success())
    } else {
        Ok(reply::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            DOWNLOAD_FAILED,
        ))
    }
}

pub async fn list_videos(context: AppContext) -> Result<Response, Infallible> {
    let video_dir = context.config.read().await.video_dir.clone();
    match library::list_videos(&video_dir).await {
        Ok(videos) => Ok(warp::reply::json(&videos).into_response()),
        Err(e) => {
            error!(dir = %video_dir.display(), error = %e, "failed to read videos");
            Ok(warp::reply::json(&Vec::<VideoEntry>::new()).into_response())
        }
    }
}

pub async fn get_config(context: AppContext) -> Result<Response, Infallible> {
    let config = context.config.read().await;
    Ok(warp::reply::json(&*config).into_response())
}

pub async fn update_config(
    new_config: Config,
    context: AppContext,
) -> Result<Response, Infallible> {
    match Config::update(new_config, &context.config, &context.config_path).await {
        Ok(()) => {
            info!(path = %context.config_path.display(), "config updated");
            Ok(reply::success())
        }
        Err(e) => {
            error!(error = %e, "config update failed");
            Ok(reply::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                CONFIG_SAVE_FAILED,
            ))
        }
    }
}

pub async fn get_note(query: NoteQuery, context: AppContext) -> Result<Response, Infallible> {
    let content = context.notes.get(&query.video_path).await;
    Ok(warp::reply::json(&json!({
        "video_path": query.video_path,
        "content": content,
    }))
    .into_response())
}

pub async fn save_note(note: NoteRequest, context: AppContext) -> Result<Response, Infallible> {
    match context.notes.save(note.video_path.clone(), note.content).await {
        Ok(()) => {
            info!(video_path = %note.video_path, "note saved");
            Ok(reply::success())
        }
        Err(e) => {
            error!(video_path = %note.video_path, error = %e, "note save failed");
            Ok(reply::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                NOTE_SAVE_FAILED,
            ))
        }
    }
}
