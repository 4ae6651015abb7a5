use hello_backend::{app_router, serve, AppConfig};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    hello_backend::logging::init_from_env();

    tracing::info!(host = %config.host, port = %config.port, "starting hello-backend");

    let router = app_router(&config);
    if let Err(err) = serve(router, &config).await {
        tracing::error!(error = %err, "server failed");
        std::process::exit(1);
    }
}
