use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioCards::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioCards::Header)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCards::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCards::Link)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(PortfolioCards::ImageUrl).text())
                    .col(
                        ColumnDef::new(PortfolioCards::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioCards::UserId).uuid())
                    .col(
                        ColumnDef::new(PortfolioCards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioCards::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // List reads always come back ordered by sort_order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_cards_sort_order
                ON portfolio_cards (sort_order);
                "#,
            )
            .await?;

        // Shared updated_at trigger function for all tables
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_cards_updated_at
                BEFORE UPDATE ON portfolio_cards
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
                DROP TRIGGER IF EXISTS update_portfolio_cards_updated_at ON portfolio_cards;
                DROP INDEX IF EXISTS idx_portfolio_cards_sort_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioCards::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PortfolioCards {
    Table,
    Id,
    Header,
    Description,
    Link,
    ImageUrl,
    SortOrder,
    UserId,
    CreatedAt,
    UpdatedAt,
}
