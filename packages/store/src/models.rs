//! # Domain models for registrations
//!
//! Defines the records persisted by [`crate::Registry`] and the closed
//! vocabularies a sign-up draws from. Every type here is
//! `Serialize + Deserialize`; field names are camelCase on the wire so a slot
//! written by earlier versions of the site still loads.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Registration`] | One accepted sign-up. Immutable once created. |
//! | [`Interest`] | A topic the person wants to hear about. Serialized as its label (`"Legal aid"`). |
//! | [`Anonymity`] | How the name may be displayed. Serialized lowercase (`"anonymous"`). |

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A topic someone can opt into when registering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Updates,
    Events,
    Volunteer,
    #[serde(rename = "Legal aid")]
    LegalAid,
    #[serde(rename = "Mutual aid")]
    MutualAid,
}

impl Interest {
    /// Human-facing label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Updates => "Updates",
            Interest::Events => "Events",
            Interest::Volunteer => "Volunteer",
            Interest::LegalAid => "Legal aid",
            Interest::MutualAid => "Mutual aid",
        }
    }

    /// All interests in display order.
    pub fn variants() -> &'static [Interest] {
        &[
            Interest::Updates,
            Interest::Events,
            Interest::Volunteer,
            Interest::LegalAid,
            Interest::MutualAid,
        ]
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-visibility preference. Affects only how the name is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anonymity {
    #[default]
    Public,
    Private,
    Anonymous,
}

impl Anonymity {
    pub fn label(&self) -> &'static str {
        match self {
            Anonymity::Public => "Public",
            Anonymity::Private => "Private",
            Anonymity::Anonymous => "Anonymous",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Anonymity::Public => "Ok to show my first name",
            Anonymity::Private => "Only staff can see",
            Anonymity::Anonymous => "No name displayed",
        }
    }

    pub fn variants() -> &'static [Anonymity] {
        &[Anonymity::Public, Anonymity::Private, Anonymity::Anonymous]
    }
}

impl fmt::Display for Anonymity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An accepted sign-up as stored in the persisted collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// `<unix-millis>_<random hex>`
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub anonymity: Anonymity,
    pub consent: bool,
}

impl Registration {
    /// Name to show in public listings.
    pub fn display_name(&self) -> &str {
        match self.anonymity {
            Anonymity::Anonymous => "Anonymous",
            Anonymity::Public | Anonymity::Private => &self.full_name,
        }
    }

    /// `City: <city>` for listings, or `None` when no city was given.
    pub fn city_line(&self) -> Option<String> {
        let city = self.city.trim();
        (!city.is_empty()).then(|| format!("City: {city}"))
    }

    /// Submission time for listings, e.g. `Dec 10, 2025 09:30 UTC`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %d, %Y %H:%M UTC").to_string()
    }
}

/// Generate a fresh registration id from a timestamp and a random component.
pub(crate) fn new_registration_id(now: &DateTime<Utc>) -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}", now.timestamp_millis(), &random[..13])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(anonymity: Anonymity) -> Registration {
        Registration {
            id: "1_abc".to_string(),
            created_at: Utc::now(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            city: String::new(),
            message: String::new(),
            interests: vec![Interest::Updates],
            anonymity,
            consent: true,
        }
    }

    #[test]
    fn test_display_name_hides_anonymous() {
        assert_eq!(sample(Anonymity::Public).display_name(), "Jane Doe");
        assert_eq!(sample(Anonymity::Private).display_name(), "Jane Doe");
        assert_eq!(sample(Anonymity::Anonymous).display_name(), "Anonymous");
    }

    #[test]
    fn test_city_line_only_when_set() {
        let mut r = sample(Anonymity::Public);
        assert_eq!(r.city_line(), None);
        r.city = "Pune".to_string();
        assert_eq!(r.city_line().as_deref(), Some("City: Pune"));
    }

    #[test]
    fn test_wire_format_uses_labels_and_camel_case() {
        let mut r = sample(Anonymity::Anonymous);
        r.interests = vec![Interest::LegalAid, Interest::MutualAid];
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["anonymity"], "anonymous");
        assert_eq!(json["interests"][0], "Legal aid");
        assert_eq!(json["interests"][1], "Mutual aid");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_loads_record_written_by_browser() {
        let raw = r#"{
            "id": "1733800000000_5f3a9c",
            "createdAt": "2025-12-10T09:30:00.000Z",
            "fullName": "Sam",
            "email": "sam@example.org",
            "phone": "",
            "city": "Pune",
            "interests": ["Events", "Volunteer"],
            "anonymity": "private",
            "message": "",
            "consent": true
        }"#;
        let r: Registration = serde_json::from_str(raw).unwrap();
        assert_eq!(r.city, "Pune");
        assert_eq!(r.interests, vec![Interest::Events, Interest::Volunteer]);
        assert_eq!(r.anonymity, Anonymity::Private);
        assert_eq!(r.created_label(), "Dec 10, 2025 09:30 UTC");
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        let a = new_registration_id(&now);
        let b = new_registration_id(&now);
        assert_ne!(a, b);
        assert!(a.starts_with(&now.timestamp_millis().to_string()));
    }
}
