use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `workers` table and its columns.
#[derive(DeriveIden)]
enum Workers {
    Table,
    Id,
    UserId,
    CreatedAt,
}

/// Identifiers for the `professions` table.
#[derive(DeriveIden)]
enum Professions {
    Table,
    Id,
    Name,
    Approved,
    CreatedAt,
}

/// Junction between workers and the professions they hold.
#[derive(DeriveIden)]
enum WorkerProfessions {
    Table,
    WorkerId,
    ProfessionId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Workers::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Workers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workers_user_id")
                            .from(Workers::Table, Workers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Professions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professions::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professions::Approved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Professions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkerProfessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WorkerProfessions::WorkerId).uuid().not_null())
                    .col(
                        ColumnDef::new(WorkerProfessions::ProfessionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WorkerProfessions::WorkerId)
                            .col(WorkerProfessions::ProfessionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_professions_worker_id")
                            .from(WorkerProfessions::Table, WorkerProfessions::WorkerId)
                            .to(Workers::Table, Workers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_professions_profession_id")
                            .from(WorkerProfessions::Table, WorkerProfessions::ProfessionId)
                            .to(Professions::Table, Professions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkerProfessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Workers::Table).to_owned())
            .await
    }
}
