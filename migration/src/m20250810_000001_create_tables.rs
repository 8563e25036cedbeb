use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::Verification).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::MiddleName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(
                        ColumnDef::new(Users::Coins)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::Entrepreneurship)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::RolePoints).text().null())
                    .col(ColumnDef::new(Users::MotivationPoints).text().null())
                    .col(ColumnDef::new(Users::CompletedAt).big_integer().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建任务表
        manager
            .create_table(
                Table::create()
                    .table(Missions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Missions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Missions::Coins)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Missions::Order)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Missions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Missions::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建任务题目表
        manager
            .create_table(
                Table::create()
                    .table(MissionQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MissionQuestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MissionQuestions::MissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MissionQuestions::Question).text().not_null())
                    .col(
                        ColumnDef::new(MissionQuestions::Order)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MissionQuestions::Answers).text().not_null())
                    .col(ColumnDef::new(MissionQuestions::Hint).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(MissionQuestions::Table, MissionQuestions::MissionId)
                            .to(Missions::Table, Missions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生任务进度表
        manager
            .create_table(
                Table::create()
                    .table(StudentMissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentMissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentMissions::MissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentMissions::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentMissions::Stage)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(StudentMissions::Answers).text().not_null())
                    .col(ColumnDef::new(StudentMissions::Reaction).string().not_null())
                    .col(
                        ColumnDef::new(StudentMissions::IsComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentMissions::IsUnlocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentMissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentMissions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentMissions::Table, StudentMissions::MissionId)
                            .to(Missions::Table, Missions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentMissions::Table, StudentMissions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生技能表
        manager
            .create_table(
                Table::create()
                    .table(StudentSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentSkills::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentSkills::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentSkills::Object).string().not_null())
                    .col(
                        ColumnDef::new(StudentSkills::Points)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSkills::Table, StudentSkills::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建技能-职业领域映射表
        manager
            .create_table(
                Table::create()
                    .table(SkillScopes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillScopes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SkillScopes::Object)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SkillScopes::Scope).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 题目表：任务内题号唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mission_questions_mission_order")
                    .table(MissionQuestions::Table)
                    .col(MissionQuestions::MissionId)
                    .col(MissionQuestions::Order)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 进度表：每个学生每个任务一行
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_missions_user_mission")
                    .table(StudentMissions::Table)
                    .col(StudentMissions::UserId)
                    .col(StudentMissions::MissionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_missions_user_id")
                    .table(StudentMissions::Table)
                    .col(StudentMissions::UserId)
                    .to_owned(),
            )
            .await?;

        // 技能表：每个学生每个技能一行
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_skills_user_object")
                    .table(StudentSkills::Table)
                    .col(StudentSkills::UserId)
                    .col(StudentSkills::Object)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(SkillScopes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentMissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MissionQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Role,
    Status,
    Verification,
    FirstName,
    LastName,
    MiddleName,
    AvatarUrl,
    Coins,
    Entrepreneurship,
    RolePoints,
    MotivationPoints,
    CompletedAt,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Missions {
    #[sea_orm(iden = "missions")]
    Table,
    Id,
    Coins,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MissionQuestions {
    #[sea_orm(iden = "mission_questions")]
    Table,
    Id,
    MissionId,
    Question,
    Order,
    Answers,
    Hint,
}

#[derive(DeriveIden)]
enum StudentMissions {
    #[sea_orm(iden = "student_missions")]
    Table,
    Id,
    MissionId,
    UserId,
    Stage,
    Answers,
    Reaction,
    IsComplete,
    IsUnlocked,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentSkills {
    #[sea_orm(iden = "student_skills")]
    Table,
    Id,
    UserId,
    Object,
    Points,
}

#[derive(DeriveIden)]
enum SkillScopes {
    #[sea_orm(iden = "skill_scopes")]
    Table,
    Id,
    Object,
    Scope,
}
