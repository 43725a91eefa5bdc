use std::env;

use config::Config;
use dotenvy::dotenv;

use repo_search::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = ServerConfig::with_defaults(Config::builder())
        .and_then(|builder| {
            builder
                // Add `./config/default.yaml`
                .add_source(config::File::with_name("config/default").required(false))
                // Add environment-specific overrides
                .add_source(
                    config::File::with_name(&format!("config/{}", app_env)).required(false),
                )
                // Add settings from the environment (with a prefix of APP)
                .add_source(config::Environment::with_prefix("APP"))
                // Bare variables understood by the original deployment.
                .set_override_option("port", env::var("PORT").ok())?
                .set_override_option("github_token", env::var("GITHUB_TOKEN").ok())?
                .build()
        });

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    repo_search::run(server_config).await
}
