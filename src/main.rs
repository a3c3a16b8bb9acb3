pub mod modules;
pub mod shared;
pub use modules::analytics;
pub use modules::auth;
pub use modules::carousel;
pub use modules::content;
pub use modules::message;
pub use modules::portfolio;
pub mod health;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::analytics::adapter::outgoing::{ClickRepositoryPostgres, VisitRepositoryPostgres};
use crate::analytics::application::ports::incoming::use_cases::{
    GetDashboardStatsUseCase, RecordClickUseCase, RecordVisitUseCase,
};
use crate::analytics::application::services::{
    GetDashboardStatsService, RecordClickService, RecordVisitService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::carousel::adapter::outgoing::{CarouselQueryPostgres, CarouselRepositoryPostgres};
use crate::carousel::application::ports::incoming::use_cases::{
    AddCarouselImageUseCase, DeleteCarouselImageUseCase, GetCarouselImagesUseCase,
    ReorderCarouselImagesUseCase, UpdateCarouselImageUseCase,
};
use crate::carousel::application::services::{
    AddCarouselImageService, DeleteCarouselImageService, GetCarouselImagesService,
    ReorderCarouselImagesService, UpdateCarouselImageService,
};
use crate::content::adapter::outgoing::ContentRepositoryPostgres;
use crate::content::application::ports::incoming::use_cases::{
    AddExpertiseAreaUseCase, GetContentUseCase, RemoveExpertiseAreaUseCase,
    ReorderExpertiseAreasUseCase, UpdateContentUseCase,
};
use crate::content::application::services::{
    AddExpertiseAreaService, GetContentService, RemoveExpertiseAreaService,
    ReorderExpertiseAreasService, UpdateContentService,
};
use crate::message::adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres};
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, SubmitMessageUseCase,
};
use crate::message::application::services::{DeleteMessageService, SubmitMessageService};
use crate::portfolio::adapter::outgoing::{PortfolioQueryPostgres, PortfolioRepositoryPostgres};
use crate::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioItemUseCase, DeletePortfolioItemUseCase, GetPortfolioItemsUseCase,
    ReorderPortfolioItemsUseCase, UpdatePortfolioItemUseCase,
};
use crate::portfolio::application::services::{
    CreatePortfolioItemService, DeletePortfolioItemService, GetPortfolioItemsService,
    ReorderPortfolioItemsService, UpdatePortfolioItemService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_list: Arc<dyn GetPortfolioItemsUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePortfolioItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioItemUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioItemUseCase + Send + Sync>,
    pub reorder: Arc<dyn ReorderPortfolioItemsUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct CarouselUseCases {
    pub get_list: Arc<dyn GetCarouselImagesUseCase + Send + Sync>,
    pub add: Arc<dyn AddCarouselImageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCarouselImageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCarouselImageUseCase + Send + Sync>,
    pub reorder: Arc<dyn ReorderCarouselImagesUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct ContentUseCases {
    pub get: Arc<dyn GetContentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateContentUseCase + Send + Sync>,
    pub add_expertise: Arc<dyn AddExpertiseAreaUseCase + Send + Sync>,
    pub remove_expertise: Arc<dyn RemoveExpertiseAreaUseCase + Send + Sync>,
    pub reorder_expertise: Arc<dyn ReorderExpertiseAreasUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct MessageUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct AnalyticsUseCases {
    pub record_click: Arc<dyn RecordClickUseCase + Send + Sync>,
    pub record_visit: Arc<dyn RecordVisitUseCase + Send + Sync>,
    pub dashboard_stats: Arc<dyn GetDashboardStatsUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub carousel: CarouselUseCases,
    pub content: ContentUseCases,
    pub message: MessageUseCases,
    pub analytics: AnalyticsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }

    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());

    // Portfolio
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
    let portfolio = PortfolioUseCases {
        get_list: Arc::new(GetPortfolioItemsService::new(portfolio_query.clone())),
        create: Arc::new(CreatePortfolioItemService::new(
            portfolio_repo.clone(),
            portfolio_query.clone(),
        )),
        update: Arc::new(UpdatePortfolioItemService::new(portfolio_repo.clone())),
        delete: Arc::new(DeletePortfolioItemService::new(portfolio_repo.clone())),
        reorder: Arc::new(ReorderPortfolioItemsService::new(
            portfolio_repo,
            portfolio_query,
        )),
    };

    // Carousel
    let carousel_repo = CarouselRepositoryPostgres::new(Arc::clone(&db_arc));
    let carousel_query = CarouselQueryPostgres::new(Arc::clone(&db_arc));
    let carousel = CarouselUseCases {
        get_list: Arc::new(GetCarouselImagesService::new(carousel_query.clone())),
        add: Arc::new(AddCarouselImageService::new(
            carousel_repo.clone(),
            carousel_query.clone(),
        )),
        update: Arc::new(UpdateCarouselImageService::new(carousel_repo.clone())),
        delete: Arc::new(DeleteCarouselImageService::new(carousel_repo.clone())),
        reorder: Arc::new(ReorderCarouselImagesService::new(
            carousel_repo,
            carousel_query,
        )),
    };

    // Content blobs
    let content_repo = ContentRepositoryPostgres::new(Arc::clone(&db_arc));
    let content = ContentUseCases {
        get: Arc::new(GetContentService::new(content_repo.clone())),
        update: Arc::new(UpdateContentService::new(content_repo.clone())),
        add_expertise: Arc::new(AddExpertiseAreaService::new(content_repo.clone())),
        remove_expertise: Arc::new(RemoveExpertiseAreaService::new(content_repo.clone())),
        reorder_expertise: Arc::new(ReorderExpertiseAreasService::new(content_repo)),
    };

    // Messages
    let message_repo = MessageRepositoryPostgres::new(Arc::clone(&db_arc));
    let message_query = MessageQueryPostgres::new(Arc::clone(&db_arc));
    let message = MessageUseCases {
        submit: Arc::new(SubmitMessageService::new(message_repo.clone())),
        delete: Arc::new(DeleteMessageService::new(message_repo)),
    };

    // Analytics
    let click_repo = ClickRepositoryPostgres::new(Arc::clone(&db_arc));
    let visit_repo = VisitRepositoryPostgres::new(Arc::clone(&db_arc));
    let analytics = AnalyticsUseCases {
        record_click: Arc::new(RecordClickService::new(click_repo.clone())),
        record_visit: Arc::new(RecordVisitService::new(visit_repo)),
        dashboard_stats: Arc::new(GetDashboardStatsService::new(click_repo, message_query)),
    };

    let state = AppState {
        portfolio,
        carousel,
        content,
        message,
        analytics,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        let app = app.configure(test_helpers::configure_routes);

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio cards
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_items_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_portfolio_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_portfolio_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_portfolio_item_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::reorder_portfolio_items_handler);
    // Carousel
    cfg.service(crate::carousel::adapter::incoming::web::routes::get_carousel_images_handler);
    cfg.service(crate::carousel::adapter::incoming::web::routes::add_carousel_image_handler);
    cfg.service(crate::carousel::adapter::incoming::web::routes::update_carousel_image_handler);
    cfg.service(crate::carousel::adapter::incoming::web::routes::delete_carousel_image_handler);
    cfg.service(crate::carousel::adapter::incoming::web::routes::reorder_carousel_images_handler);
    // Content blobs and expertise areas
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::add_expertise_area_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::remove_expertise_area_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::reorder_expertise_areas_handler);
    // Messages
    cfg.service(crate::message::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::delete_message_handler);
    // Analytics
    cfg.service(crate::analytics::adapter::incoming::web::routes::record_click_handler);
    cfg.service(crate::analytics::adapter::incoming::web::routes::record_visit_handler);
    cfg.service(crate::analytics::adapter::incoming::web::routes::get_dashboard_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
