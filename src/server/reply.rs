use super::constant::SUCCESS;
use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

#[derive(Debug, Deserialize, Serialize)]
pub struct Status {
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Detail {
    pub detail: String,
}

pub fn success() -> Response {
    warp::reply::json(&Status {
        status: SUCCESS.to_string(),
    })
    .into_response()
}

pub fn error(status: StatusCode, detail: impl Into<String>) -> Response {
    let body = Detail {
        detail: detail.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}
