use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioMessages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioMessages::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioMessages::Email)
                            .string_len(320)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioMessages::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioMessages::Status)
                            .string_len(20)
                            .not_null()
                            .default("unread"),
                    )
                    .col(
                        ColumnDef::new(PortfolioMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard reads newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_messages_created_at
                ON portfolio_messages (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_portfolio_messages_created_at;")
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioMessages {
    Table,
    Id,
    Name,
    Email,
    Message,
    Status,
    CreatedAt,
}
