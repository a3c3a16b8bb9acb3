use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioContent::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::ContentType)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::Content)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::Revision)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PortfolioContent::UserId).uuid())
                    .col(
                        ColumnDef::new(PortfolioContent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::UpdatedAt)
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
                CREATE TRIGGER update_portfolio_content_updated_at
                BEFORE UPDATE ON portfolio_content
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        // Seed the three singleton sections so GET never 404s on a
        // fresh deployment and PUT always has a row to CAS against.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO portfolio_content (content_type, content)
                VALUES
                    ('hero_content', '{"title": "", "subtitle": "", "features": []}'),
                    ('about_content', '{"title": "", "main_description": [], "features": []}'),
                    ('expertise_areas', '[]')
                ON CONFLICT (content_type) DO NOTHING;
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
                DROP TRIGGER IF EXISTS update_portfolio_content_updated_at ON portfolio_content;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioContent {
    Table,
    Id,
    ContentType,
    Content,
    Revision,
    UserId,
    CreatedAt,
    UpdatedAt,
}
