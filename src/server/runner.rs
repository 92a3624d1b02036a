use super::config::Config;
use super::controller::{
    get_config, get_note, list_videos, save_note, start_download, update_config, with_context,
    AppContext,
};
use super::rejection::handle_rejection;
use crate::downloader::ytdlp::YtDlp;
use crate::notes::store::NoteStore;
use anyhow::{Context, Result};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use warp::{Filter, Reply};

/// Startup settings that come from the command line.
#[derive(Clone, Debug)]
pub struct ServerOptions {
    pub config_path: PathBuf,
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
}

pub fn routes(
    context: AppContext,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let download_route = warp::path!("download")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_context(context.clone()))
        .and_then(start_download);

    let videos_route = warp::path!("videos")
        .and(warp::get())
        .and(with_context(context.clone()))
        .and_then(list_videos);

    let get_config_route = warp::path!("config")
        .and(warp::get())
        .and(with_context(context.clone()))
        .and_then(get_config);

    let update_config_route = warp::path!("config")
        .and(warp::put())
        .and(warp::body::json())
        .and(with_context(context.clone()))
        .and_then(update_config);

    let get_note_route = warp::path!("notes")
        .and(warp::get())
        .and(warp::query())
        .and(with_context(context.clone()))
        .and_then(get_note);

    let save_note_route = warp::path!("notes")
        .and(warp::put())
        .and(warp::body::json())
        .and(with_context(context.clone()))
        .and_then(save_note);

    let media_route = warp::path("media")
        .and(warp::get())
        .and(warp::fs::dir(context.media_dir.to_path_buf()));

    download_route
        .or(videos_route)
        .or(get_config_route)
        .or(update_config_route)
        .or(get_note_route)
        .or(save_note_route)
        .or(media_route)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

pub async fn run_server(options: ServerOptions) -> Result<()> {
    let config = Config::load(&options.config_path).await;
    let addr = SocketAddr::new(
        options.address.unwrap_or(config.address),
        options.port.unwrap_or(config.port),
    );

    let notes = NoteStore::load(config.notes_path.clone()).await;
    let context = AppContext::new(config, options.config_path, Arc::new(YtDlp), notes);

    let (bound, server) = warp::serve(routes(context))
        .try_bind_with_graceful_shutdown(addr, shutdown_signal())
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %bound, "Start Server");
    server.await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
