use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Global catalog entry, shared by every user who joins it
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "challenges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub challenge_type: String, // see domain::ChallengeType
    pub target_value: i32,
    pub points_reward: i32,
    pub badge_name: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_challenge::Entity")]
    UserChallenge,
}

impl Related<super::user_challenge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserChallenge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
