use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub owner_id: Uuid,       // FK -> user.id
    pub is_public: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::membership::Entity")]
    Membership,
    #[sea_orm(has_many = "super::quiz::Entity")]
    Quiz,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Owner.def() }
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef { Relation::Membership.def() }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef { Relation::Quiz.def() }
}

impl ActiveModelBehavior for ActiveModel {}
