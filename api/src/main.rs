use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use bh_api::{app::create_app, config::load_config, routes::AppState};
use bh_core::repositories::{
    AuthorRepository, BlogPostRepository, InMemoryAuthorRepository, InMemoryBlogPostRepository,
};
use bh_core::services::BlogPostService;
use bh_infra::database::{DatabasePool, MySqlAuthorRepository, MySqlBlogPostRepository};
use bh_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = load_config()?;

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    config.validate().map_err(anyhow::Error::msg)?;

    info!(
        "Starting BlogHub API ({:?}) on {}",
        config.environment,
        config.server.bind_address()
    );

    match config.database.clone() {
        Some(database) => {
            let pool = DatabasePool::new(database).await?;
            pool.ensure_schema().await?;
            info!("{}", pool.get_statistics());

            let authors = MySqlAuthorRepository::new(pool.get_pool().clone());
            let posts = MySqlBlogPostRepository::new(pool.get_pool().clone());
            let result = run(authors, posts, config).await;

            pool.close().await;
            result
        }
        None => {
            info!("No database configured, using the in-memory stores");
            run(
                InMemoryAuthorRepository::new(),
                InMemoryBlogPostRepository::new(),
                config,
            )
            .await
        }
    }
}

async fn run<R, P>(authors: R, posts: P, config: AppConfig) -> anyhow::Result<()>
where
    R: AuthorRepository + 'static,
    P: BlogPostRepository + 'static,
{
    let authors = Arc::new(authors);
    let state = web::Data::new(AppState::new(authors.clone(), &config.auth)?);
    let posts = web::Data::new(BlogPostService::new(authors, Arc::new(posts)));
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || create_app(state.clone(), posts.clone(), &config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("BlogHub API stopped");
    Ok(())
}
