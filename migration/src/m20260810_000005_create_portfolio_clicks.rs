use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioClicks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioClicks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioClicks::ProjectTitle)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioClicks::ClickedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Both the 7-day window and the latest-50 read scan by time
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_clicks_clicked_at
                ON portfolio_clicks (clicked_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_portfolio_clicks_clicked_at;")
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioClicks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioClicks {
    Table,
    Id,
    ProjectTitle,
    ClickedAt,
}
