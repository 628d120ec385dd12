use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;

use aurum_estates::models::config::ServerConfig;

/// Defaults suit local development; `config.yaml` and environment
/// variables (e.g. `BACKEND_URL`, `PORT`) override them.
fn load_config() -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080)?
        .set_default("templates_dir", "templates/**/*.html")?
        .set_default("assets_dir", "./assets")?
        .set_default(
            "secret",
            "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
        )?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config = load_config().map_err(std::io::Error::other)?;

    aurum_estates::run(server_config).await
}
