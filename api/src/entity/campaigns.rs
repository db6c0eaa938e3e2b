use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub from_date: DateTimeWithTimeZone,
    pub to_date: DateTimeWithTimeZone,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_rules::Entity")]
    CampaignRules,
}

impl Related<super::campaign_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignRules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
