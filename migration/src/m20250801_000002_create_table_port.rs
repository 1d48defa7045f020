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
                    .table(Port::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Port::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Port::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Port::Category).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Port::Status)
                            .string()
                            .not_null()
                            .default("broken"),
                    )
                    .col(ColumnDef::new(Port::Description).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Port::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Port::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Port::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Port {
    Table,
    Id,
    Name,
    Category,
    Status,
    Description,
    CreatedAt,
    UpdatedAt,
}
