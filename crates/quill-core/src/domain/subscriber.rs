use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, UnknownVariant};

/// Where a newsletter signup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberSource {
    #[default]
    Homepage,
    Blog,
    Popup,
    Import,
}

impl SubscriberSource {
    pub const ALL: [SubscriberSource; 4] = [
        SubscriberSource::Homepage,
        SubscriberSource::Blog,
        SubscriberSource::Popup,
        SubscriberSource::Import,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberSource::Homepage => "homepage",
            SubscriberSource::Blog => "blog",
            SubscriberSource::Popup => "popup",
            SubscriberSource::Import => "import",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriberSource::Homepage => "subscriber.source.homepage",
            SubscriberSource::Blog => "subscriber.source.blog",
            SubscriberSource::Popup => "subscriber.source.popup",
            SubscriberSource::Import => "subscriber.source.import",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SubscriberSource::Homepage => "primary",
            SubscriberSource::Blog => "info",
            SubscriberSource::Popup => "warning",
            SubscriberSource::Import => "secondary",
        }
    }
}

impl fmt::Display for SubscriberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriberSource {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("subscriber source", s))
    }
}

/// Newsletter subscriber.
///
/// A subscriber is active once confirmed and until unsubscribed. Unsubscribing
/// is permanent: there is no way back to active for the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
    pub is_confirmed: bool,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub source: SubscriberSource,
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub locale: String,
    pub notes: Option<String>,
    pub ip_address: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
}

impl Subscriber {
    pub fn new(email: String, source: SubscriberSource, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name: None,
            subscribed_at: now,
            is_confirmed: false,
            confirmed_at: None,
            source,
            unsubscribed_at: None,
            locale: "en".to_string(),
            notes: None,
            ip_address: None,
            country: None,
            timezone: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }

    pub fn is_unsubscribed(&self) -> bool {
        self.unsubscribed_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.is_confirmed && self.unsubscribed_at.is_none()
    }

    /// Confirm the subscription. Calling it again moves `confirmed_at` forward.
    pub fn confirm(&mut self, now: DateTime<Utc>) {
        self.is_confirmed = true;
        self.confirmed_at = Some(now);
    }

    /// Unsubscribe, whether or not the address was ever confirmed.
    pub fn unsubscribe(&mut self, now: DateTime<Utc>) {
        self.unsubscribed_at = Some(now);
    }
}

impl Entity for Subscriber {
    const NAME: &'static str = "subscriber";

    fn id(&self) -> Uuid {
        self.id
    }
}
