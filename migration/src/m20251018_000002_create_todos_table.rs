use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create enum type for todos.todo_status
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'todo_status') THEN
                        CREATE TYPE todo_status AS ENUM ('active', 'completed');
                    END IF;
                END$$;
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Todos::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Todos::TodoName).text().not_null())
                    .col(ColumnDef::new(Todos::TodoDesc).text().not_null())
                    .col(
                        ColumnDef::new(Todos::TodoStatus)
                            .custom(Alias::new("todo_status"))
                            .not_null()
                            .default(Expr::cust("'active'::todo_status")),
                    )
                    .col(
                        ColumnDef::new(Todos::TodoImage)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Todos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Todos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::cust("length(btrim(todo_name)) > 0"))
                    .check(Expr::cust("length(btrim(todo_desc)) > 0"))
                    .to_owned(),
            )
            .await?;

        // get_all lists in creation order
        manager
            .create_index(
                Index::create()
                    .name("idx_todos_created_at")
                    .table(Todos::Table)
                    .col(Todos::CreatedAt)
                    .col(Todos::Id)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // update_updated_at_column() comes from the users migration
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_todos_updated_at
                BEFORE UPDATE ON todos
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_todos_updated_at ON todos")
            .await?;

        manager
            .drop_table(Table::drop().table(Todos::Table).if_exists().to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS todo_status")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    TodoName,
    TodoDesc,
    TodoStatus,
    TodoImage,
    CreatedAt,
    UpdatedAt,
}
