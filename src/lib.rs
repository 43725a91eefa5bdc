#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::configure;
#[cfg(feature = "server")]
use crate::upstream::SearchUpstream;
#[cfg(feature = "server")]
use crate::upstream::github::GithubClient;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod pagination;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod upstream;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One pooled HTTP client shared by every worker.
    let client = GithubClient::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build GitHub client: {e}")))?;
    let upstream: Arc<dyn SearchUpstream> = Arc::new(client);
    let upstream = web::Data::from(upstream);

    let bind_address = (server_config.address.clone(), server_config.port);
    let static_dir = server_config.static_dir.clone();
    log::info!(
        "Serving {} on {}:{}",
        server_config.static_dir,
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(upstream.clone())
            .configure(|cfg| configure(cfg, &static_dir))
    })
    .bind(bind_address)?
    .run()
    .await
}
