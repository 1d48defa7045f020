/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lock::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lock::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lock::PortId).integer().not_null())
                    .col(ColumnDef::new(Lock::DeveloperId).string().not_null())
                    .col(ColumnDef::new(Lock::DeveloperName).string().not_null())
                    .col(
                        ColumnDef::new(Lock::LockedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lock::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lock::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lock::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lock-port_id")
                            .from(Lock::Table, Lock::PortId)
                            .to(Port::Table, Port::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one lock per port, enforced by the store.
        manager
            .create_index(
                Index::create()
                    .name("idx-lock-port_id")
                    .table(Lock::Table)
                    .col(Lock::PortId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx-lock-port_id").table(Lock::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Lock {
    Table,
    Id,
    PortId,
    DeveloperId,
    DeveloperName,
    LockedAt,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Port {
    Table,
    Id,
}
