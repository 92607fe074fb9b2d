//! Subscriber entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::SubscriberSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Source {
    #[sea_orm(string_value = "homepage")]
    Homepage,
    #[sea_orm(string_value = "blog")]
    Blog,
    #[sea_orm(string_value = "popup")]
    Popup,
    #[sea_orm(string_value = "import")]
    Import,
}

impl From<SubscriberSource> for Source {
    fn from(source: SubscriberSource) -> Self {
        match source {
            SubscriberSource::Homepage => Source::Homepage,
            SubscriberSource::Blog => Source::Blog,
            SubscriberSource::Popup => Source::Popup,
            SubscriberSource::Import => Source::Import,
        }
    }
}

impl From<Source> for SubscriberSource {
    fn from(source: Source) -> Self {
        match source {
            Source::Homepage => SubscriberSource::Homepage,
            Source::Blog => SubscriberSource::Blog,
            Source::Popup => SubscriberSource::Popup,
            Source::Import => SubscriberSource::Import,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriber")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: DateTimeWithTimeZone,
    pub is_confirmed: bool,
    pub confirmed_at: Option<DateTimeWithTimeZone>,
    pub source: Source,
    pub unsubscribed_at: Option<DateTimeWithTimeZone>,
    pub locale: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub ip_address: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for quill_core::domain::Subscriber {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            subscribed_at: model.subscribed_at.into(),
            is_confirmed: model.is_confirmed,
            confirmed_at: model.confirmed_at.map(Into::into),
            source: model.source.into(),
            unsubscribed_at: model.unsubscribed_at.map(Into::into),
            locale: model.locale,
            notes: model.notes,
            ip_address: model.ip_address,
            country: model.country,
            timezone: model.timezone,
        }
    }
}

impl From<quill_core::domain::Subscriber> for ActiveModel {
    fn from(subscriber: quill_core::domain::Subscriber) -> Self {
        Self {
            id: Set(subscriber.id),
            email: Set(subscriber.email),
            name: Set(subscriber.name),
            subscribed_at: Set(subscriber.subscribed_at.into()),
            is_confirmed: Set(subscriber.is_confirmed),
            confirmed_at: Set(subscriber.confirmed_at.map(Into::into)),
            source: Set(subscriber.source.into()),
            unsubscribed_at: Set(subscriber.unsubscribed_at.map(Into::into)),
            locale: Set(subscriber.locale),
            notes: Set(subscriber.notes),
            ip_address: Set(subscriber.ip_address),
            country: Set(subscriber.country),
            timezone: Set(subscriber.timezone),
        }
    }
}
