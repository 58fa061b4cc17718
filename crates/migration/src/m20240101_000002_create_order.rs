//! Create `orders` collection.
//! `product_id` / `user_id` are plain references: no foreign keys.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(uuid(Orders::Id).primary_key())
                    .col(uuid(Orders::ProductId))
                    .col(uuid_null(Orders::UserId))
                    .col(integer(Orders::Quantity))
                    .col(string_len(Orders::Status, 32))
                    .col(text_null(Orders::ShippingAddress))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, Id, ProductId, UserId, Quantity, Status, ShippingAddress }
