use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder};
use log::{debug, error, info, warn};
use serde::Serialize;

use crate::generator::ClashConfig;
use crate::interfaces::converter::{convert, decode_share_segment, ConvertError, ConvertRequest};
use crate::settings::Settings;

const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "Content-Type";

#[derive(Debug, Serialize)]
pub struct ConvertResponse<'a> {
    pub success: bool,
    pub config: &'a ClashConfig,
    pub yaml: &'a str,
    #[serde(rename = "subscriptionUrl")]
    pub subscription_url: &'a str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn with_cors(status: StatusCode) -> HttpResponseBuilder {
    let mut resp = HttpResponse::build(status);
    resp.insert_header(("Access-Control-Allow-Origin", "*"));
    resp
}

fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    with_cors(status).json(ErrorResponse {
        error: message.into(),
    })
}

/// Scheme and host the request came in on, used as the share link base
fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

pub async fn status_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Clash subconverter is running!")
}

/// CORS preflight for `/convert`
pub async fn preflight_handler() -> HttpResponse {
    with_cors(StatusCode::OK)
        .insert_header(("Access-Control-Allow-Methods", CORS_ALLOW_METHODS))
        .insert_header(("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS))
        .finish()
}

/// Convert a subscription and answer with the config, its YAML and a share link
pub async fn convert_handler(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let request: ConvertRequest = if body.is_empty() {
        ConvertRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(e) => {
                error!("Conversion failed: unreadable request body: {}", e);
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Conversion failed: invalid request body: {}", e),
                );
            }
        }
    };

    let settings = Settings::current();
    let origin = request_origin(&req);
    debug!("Conversion request via {}", origin);

    match convert(&request, &origin, &settings).await {
        Ok(result) => with_cors(StatusCode::OK).json(ConvertResponse {
            success: true,
            config: &result.config,
            yaml: &result.yaml,
            subscription_url: &result.share_url,
            message: format!(
                "Converted {} nodes. Import the subscription URL into your Clash client.",
                result.node_count
            ),
        }),
        Err(e @ ConvertError::InputMissing) => {
            warn!("Conversion request without input");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Conversion failed: {}", e))
        }
    }
}

/// Serve the document embedded in a share link
pub async fn share_handler(path: web::Path<String>) -> HttpResponse {
    share_response(&path.into_inner())
}

/// `/clash/` without an id
pub async fn empty_share_handler() -> HttpResponse {
    share_response("")
}

fn share_response(segment: &str) -> HttpResponse {
    let settings = Settings::current();

    match decode_share_segment(segment) {
        Ok(yaml) => {
            info!("Serving shared config ({} bytes)", yaml.len());
            with_cors(StatusCode::OK)
                .content_type("text/yaml; charset=utf-8")
                .insert_header((
                    "Cache-Control",
                    "no-cache, no-store, must-revalidate",
                ))
                .insert_header(("Pragma", "no-cache"))
                .insert_header(("Expires", "0"))
                .insert_header((
                    "Profile-Update-Interval",
                    settings.update_interval.to_string(),
                ))
                .body(yaml)
        }
        Err(e) => {
            warn!("Rejected share link: {}", e);
            with_cors(StatusCode::BAD_REQUEST)
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string())
        }
    }
}

/// Register all routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status_handler))
        .route("/convert", web::post().to(convert_handler))
        .route("/convert", web::method(actix_web::http::Method::OPTIONS).to(preflight_handler))
        .route("/clash/", web::get().to(empty_share_handler))
        .route("/clash/{id}", web::get().to(share_handler));
}
