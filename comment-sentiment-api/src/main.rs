use {
    tracing::info,
    comment_sentiment_core::{
        analysis::AnalysisService,
        config::Config,
    },
    comment_sentiment_api::{
        build_router,
        utils::init_logging,
        AppState,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("comment sentiment api v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    let server = config.server();
    let storage = config.storage();
    info!("reading comments from {}, writing results to {}", storage.comments_dir().display(), storage.results_dir().display());

    let state = AppState::new(AnalysisService::from_config(&config));
    let app = build_router(state, &server);

    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    info!("listening on http://{}", server.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
