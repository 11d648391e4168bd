//! Serves the compiled user administration frontend.
//!
//! The bundle is embedded at build time (see `build.rs`); the users API lives
//! on a separate backend the frontend calls directly.

mod config;
mod embedded;

use crate::config::HostConfig;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config =
        HostConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open a browser at {url}: {err}");
            }
        });
    }

    info!("Server running at {}", url);
    info!("Frontend talks to the users API at {}", common::api::routes::base_url());

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::route().to(embedded::serve))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
