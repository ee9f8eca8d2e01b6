use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create roles table
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(string(Roles::RoleId).primary_key())
                    .col(string(Roles::RoleName))
                    .col(string(Roles::Status).default(""))
                    .to_owned(),
            )
            .await?;

        // Create branches table
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(string(Branches::BranchId).primary_key())
                    .col(string(Branches::BranchName))
                    .to_owned(),
            )
            .await?;

        // Create classes table
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(string(Classes::ClassId).primary_key())
                    .col(string(Classes::ClassName))
                    .col(string(Classes::BranchId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_branch")
                            .from(Classes::Table, Classes::BranchId)
                            .to(Branches::Table, Branches::BranchId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(string(Users::UserId).primary_key())
                    .col(string(Users::FullName))
                    .col(string(Users::MobileNumber))
                    .col(string(Users::EmailAddress))
                    .col(string(Users::IcNo))
                    .col(string_len(Users::Gender, 10))
                    .col(date(Users::Dob))
                    .col(string(Users::Address1))
                    .col(string(Users::City))
                    .col(string(Users::ZipCode))
                    .col(string(Users::State))
                    .col(string(Users::Status).default(""))
                    .col(string(Users::VehicleInfo).default(""))
                    .col(string_null(Users::BranchId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_branch")
                            .from(Users::Table, Users::BranchId)
                            .to(Branches::Table, Branches::BranchId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users_roles table (join table)
        manager
            .create_table(
                Table::create()
                    .table(UsersRoles::Table)
                    .if_not_exists()
                    .col(string(UsersRoles::UserId))
                    .col(string(UsersRoles::RoleId))
                    .primary_key(
                        Index::create()
                            .name("pk_users_roles")
                            .col(UsersRoles::UserId)
                            .col(UsersRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_roles_user")
                            .from(UsersRoles::Table, UsersRoles::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_roles_role")
                            .from(UsersRoles::Table, UsersRoles::RoleId)
                            .to(Roles::Table, Roles::RoleId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users_classes table (join table)
        manager
            .create_table(
                Table::create()
                    .table(UsersClasses::Table)
                    .if_not_exists()
                    .col(string(UsersClasses::UserId))
                    .col(string(UsersClasses::ClassId))
                    .primary_key(
                        Index::create()
                            .name("pk_users_classes")
                            .col(UsersClasses::UserId)
                            .col(UsersClasses::ClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_classes_user")
                            .from(UsersClasses::Table, UsersClasses::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_classes_class")
                            .from(UsersClasses::Table, UsersClasses::ClassId)
                            .to(Classes::Table, Classes::ClassId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    RoleId,
    RoleName,
    Status,
}

#[derive(DeriveIden)]
enum Branches {
    Table,
    BranchId,
    BranchName,
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    ClassId,
    ClassName,
    BranchId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    FullName,
    MobileNumber,
    EmailAddress,
    IcNo,
    Gender,
    Dob,
    Address1,
    City,
    ZipCode,
    State,
    Status,
    VehicleInfo,
    BranchId,
}

#[derive(DeriveIden)]
enum UsersRoles {
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum UsersClasses {
    Table,
    UserId,
    ClassId,
}
