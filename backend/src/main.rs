mod config;
mod static_files;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open browser at {}: {}", url, e);
            }
        });
    }

    info!("Form builder running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(static_files::serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
