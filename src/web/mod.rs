// src/web/mod.rs

pub mod handlers;
pub mod page;
pub mod types;

pub use types::*;

use crate::environment::ServiceConfig;
use crate::job_scraper::JobSearchClient;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::{catch, catchers, get, options, post, routes, Request, Response, State};
use std::path::PathBuf;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(page::SEARCH_PAGE)
}

#[post("/search", data = "<form>")]
pub async fn search(
    form: Form<SearchForm<'_>>,
    config: &State<ServiceConfig>,
    client: &State<JobSearchClient>,
) -> Json<SearchResponse> {
    handlers::search_handler(form, config, client).await
}

#[get("/export/<file>")]
pub async fn export(
    file: &str,
    config: &State<ServiceConfig>,
) -> Result<SpreadsheetResponse, NotFound<Json<ErrorResponse>>> {
    handlers::export_handler(file, config).await
}

#[get("/health")]
pub fn health() -> Json<serde_json::Value> {
    handlers::health_handler()
}

#[options("/<_path..>")]
pub fn all_options(_path: PathBuf) {}

#[catch(400)]
fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Bad request"))
}

#[catch(404)]
fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Not found"))
}

#[catch(422)]
fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid form submission. Check the résumé file and search fields.",
    ))
}

#[catch(500)]
fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

pub async fn start_web_server(config: ServiceConfig) -> Result<()> {
    let client = JobSearchClient::new(&config)?;

    info!("Starting JobIntel API server");
    info!("Export directory: {}", config.export_path.display());

    // Allow résumé uploads up to 10MiB.
    let figment = rocket::Config::figment()
        .merge(("limits.file", "10MiB"))
        .merge(("limits.data-form", "12MiB"));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .manage(client)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount("/", routes![index])
        .mount("/api", routes![search, export, health, all_options])
        .launch()
        .await?;

    Ok(())
}
