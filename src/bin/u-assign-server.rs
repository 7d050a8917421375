use u_assign::server::{self, Config, ServerError};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_logging();
    let config = Config::from_env()?;
    server::serve(config).await
}
