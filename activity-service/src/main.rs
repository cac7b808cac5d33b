use lambda_http::Error;
use log::info;

mod config;
mod error;
mod handlers;
mod models;
mod routes;


use crate::config::ServiceConfig;
use crate::routes::create_router;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Activity Signup Service");

    let config = ServiceConfig::from_env()?;
    let app = create_router(&config);

    if config.lambda {
        info!("Lambda runtime detected, serving through lambda_http");
        lambda_http::run(app).await?;
        return Ok(());
    }

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
