use newsroom_core::application::{
    notifications::{ApprovalNotifier, NotifierSettings},
    ports::{email::EmailChannel, social::SocialChannel, time::Clock},
    services::ApplicationServices,
};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    newsletter::NewsletterRepository,
    publisher::PublisherRepository,
    user::{EmailAddress, UserRepository},
};
use newsroom_core::infrastructure::{
    channels::{RestEmailChannel, StatusApiSocialChannel},
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresNewsletterRepository, PostgresPublisherRepository, PostgresUserRepository,
    },
    time::SystemClock,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let newsletter_repo: Arc<dyn NewsletterRepository> =
        Arc::new(PostgresNewsletterRepository::new(pool.clone()));
    let publisher_repo: Arc<dyn PublisherRepository> =
        Arc::new(PostgresPublisherRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));

    let sender = EmailAddress::new(config.sender_email())?;
    let email_channel: Arc<dyn EmailChannel> = Arc::new(RestEmailChannel::new(
        config.email_api_url(),
        config.email_api_token(),
        sender,
        config.email_timeout(),
    )?);

    let social_channel: Option<Arc<dyn SocialChannel>> = match config.social_channel() {
        Some(credentials) => {
            let channel = StatusApiSocialChannel::new(
                config.social_post_url(),
                credentials.clone(),
                config.social_timeout(),
            )?;
            Some(Arc::new(channel) as Arc<dyn SocialChannel>)
        }
        None => None,
    };

    let notifier = Arc::new(ApprovalNotifier::new(
        Arc::clone(&user_repo),
        email_channel,
        social_channel,
        NotifierSettings {
            social_excerpt_chars: config.social_excerpt_chars(),
        },
    ));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        newsletter_repo,
        publisher_repo,
        user_repo,
        notifier,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
