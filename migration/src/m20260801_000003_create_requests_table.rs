use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `requests` table and its columns.
#[derive(DeriveIden)]
enum Requests {
    Table,
    Id,
    UserId,
    Subject,
    Description,
    RangeMin,
    RangeMax,
    Status,
    CreatedAt,
}

/// Junction between requests and their profession tags.
#[derive(DeriveIden)]
enum RequestProfessions {
    Table,
    RequestId,
    ProfessionId,
}

/// Identifiers for the `images` table.
#[derive(DeriveIden)]
enum Images {
    Table,
    Id,
    RequestId,
    Url,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Professions {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Requests::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Requests::UserId).uuid().not_null())
                    .col(ColumnDef::new(Requests::Subject).string().not_null())
                    .col(ColumnDef::new(Requests::Description).text().not_null())
                    .col(ColumnDef::new(Requests::RangeMin).integer().not_null())
                    .col(ColumnDef::new(Requests::RangeMax).integer().not_null())
                    .col(ColumnDef::new(Requests::Status).string().not_null())
                    .col(
                        ColumnDef::new(Requests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_user_id")
                            .from(Requests::Table, Requests::UserId)
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
                    .table(RequestProfessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestProfessions::RequestId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RequestProfessions::ProfessionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RequestProfessions::RequestId)
                            .col(RequestProfessions::ProfessionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_professions_request_id")
                            .from(RequestProfessions::Table, RequestProfessions::RequestId)
                            .to(Requests::Table, Requests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_professions_profession_id")
                            .from(RequestProfessions::Table, RequestProfessions::ProfessionId)
                            .to(Professions::Table, Professions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Images::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Images::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Images::RequestId).uuid().not_null())
                    .col(ColumnDef::new(Images::Url).string().not_null())
                    .col(
                        ColumnDef::new(Images::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_images_request_id")
                            .from(Images::Table, Images::RequestId)
                            .to(Requests::Table, Requests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RequestProfessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await
    }
}
