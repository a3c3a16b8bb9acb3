use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioCarousel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioCarousel::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioCarousel::ImageUrl)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioCarousel::Caption).text())
                    .col(
                        ColumnDef::new(PortfolioCarousel::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCarousel::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioCarousel::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_carousel_sort_order
                ON portfolio_carousel (sort_order);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_carousel_updated_at
                BEFORE UPDATE ON portfolio_carousel
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_portfolio_carousel_updated_at ON portfolio_carousel;
                DROP INDEX IF EXISTS idx_portfolio_carousel_sort_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioCarousel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioCarousel {
    Table,
    Id,
    ImageUrl,
    Caption,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
