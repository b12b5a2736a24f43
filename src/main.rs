use anyhow::Result;
use quillpost::application::{
    ports::{ClockPort, ImageUploaderPort, SlugGeneratorPort},
    services::{ApplicationServices, Repositories},
};
use quillpost::config::AppConfig;
use quillpost::infrastructure::{
    database,
    repositories::{
        PostgresCategoryReadRepository, PostgresCategoryWriteRepository,
        PostgresPostReadRepository, PostgresPostWriteRepository,
    },
    time::SystemClock,
    uploads::CloudinaryUploader,
    util::DefaultSlugGenerator,
};
use quillpost::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(
        max_connections = config.database_max_connections(),
        "database ready"
    );

    let repos = Repositories {
        post_write: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
        post_read: Arc::new(PostgresPostReadRepository::new(pool.clone())),
        category_write: Arc::new(PostgresCategoryWriteRepository::new(pool.clone())),
        category_read: Arc::new(PostgresCategoryReadRepository::new(pool)),
    };

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let uploader: Option<Arc<ImageUploaderPort>> = match config.cloudinary() {
        Some(cloudinary) => {
            tracing::info!(
                cloud = %cloudinary.cloud_name,
                folder = %cloudinary.folder,
                "image uploads enabled"
            );
            Some(Arc::new(CloudinaryUploader::new(
                cloudinary.clone(),
                Arc::clone(&clock),
            )))
        }
        None => {
            tracing::warn!("CLOUDINARY_* not set; image uploads will fail");
            None
        }
    };

    let services = Arc::new(ApplicationServices::new(repos, clock, slugger, uploader));
    let state = HttpState { services };

    let app = build_router_with_options(state, RouterOptions::from(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
