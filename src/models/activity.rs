use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only feed entry. Only removed through cascading user deletion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub activity_type: String,
    pub title: String,
    pub description: String,
    pub points_earned: i32,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Welcome,
    Workout,
    LevelUp,
    Achievement,
    ChallengeJoined,
    Goal,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Welcome => "welcome",
            ActivityKind::Workout => "workout",
            ActivityKind::LevelUp => "level_up",
            ActivityKind::Achievement => "achievement",
            ActivityKind::ChallengeJoined => "challenge_joined",
            ActivityKind::Goal => "goal",
        }
    }
}
