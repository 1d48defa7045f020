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
                    .table(Pr::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pr::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pr::PortId).integer().not_null())
                    .col(ColumnDef::new(Pr::PrNumber).integer().not_null().default(0))
                    .col(ColumnDef::new(Pr::PrUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Pr::Status).string().not_null().default("open"))
                    .col(
                        ColumnDef::new(Pr::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pr::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-pr-port_id")
                            .from(Pr::Table, Pr::PortId)
                            .to(Port::Table, Port::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pr::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pr {
    Table,
    Id,
    PortId,
    PrNumber,
    PrUrl,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Port {
    Table,
    Id,
}
