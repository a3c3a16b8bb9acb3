pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_portfolio_cards;
mod m20260810_000002_create_portfolio_carousel;
mod m20260810_000003_create_portfolio_content;
mod m20260810_000004_create_portfolio_messages;
mod m20260810_000005_create_portfolio_clicks;
mod m20260810_000006_create_portfolio_visits;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_portfolio_cards::Migration),
            Box::new(m20260810_000002_create_portfolio_carousel::Migration),
            Box::new(m20260810_000003_create_portfolio_content::Migration),
            Box::new(m20260810_000004_create_portfolio_messages::Migration),
            Box::new(m20260810_000005_create_portfolio_clicks::Migration),
            Box::new(m20260810_000006_create_portfolio_visits::Migration),
        ]
    }
}
