use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Requests {
    Table,
    UserId,
    Status,
}

#[derive(DeriveIden)]
enum Proposals {
    Table,
    RequestId,
    WorkerId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    UserId,
    WorkerId,
}

#[derive(DeriveIden)]
enum Images {
    Table,
    RequestId,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_requests_user_id")
                    .table(Requests::Table)
                    .col(Requests::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_requests_status")
                    .table(Requests::Table)
                    .col(Requests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_request_id")
                    .table(Proposals::Table)
                    .col(Proposals::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_worker_id")
                    .table(Proposals::Table)
                    .col(Proposals::WorkerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_user_id")
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_worker_id")
                    .table(Reviews::Table)
                    .col(Reviews::WorkerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_images_request_id")
                    .table(Images::Table)
                    .col(Images::RequestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_user_id")
                    .table(Profiles::Table)
                    .col(Profiles::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_requests_user_id",
            "idx_requests_status",
            "idx_proposals_request_id",
            "idx_proposals_worker_id",
            "idx_reviews_user_id",
            "idx_reviews_worker_id",
            "idx_images_request_id",
            "idx_profiles_user_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}
