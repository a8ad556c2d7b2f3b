use serde::{Deserialize, Serialize};

use crate::domain::types::{Identified, RecordId, lenient_f64, nullable, wire_enum};

wire_enum! {
    SponsorshipLevel default Silver {
        Platinum => "platinum", "Platinum";
        Gold => "gold", "Gold";
        Silver => "silver", "Silver";
        Bronze => "bronze", "Bronze";
    }
}

wire_enum! {
    SponsorStatus default Active {
        Active => "active", "Active";
        Pending => "pending", "Pending";
        Inactive => "inactive", "Inactive";
    }
}

/// Sponsors link to facebook instead of github.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorSocial {
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter: String,
    #[serde(deserialize_with = "nullable")]
    pub facebook: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsor {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(deserialize_with = "nullable")]
    pub logo_url: String,
    #[serde(deserialize_with = "nullable")]
    pub contact_name: String,
    #[serde(deserialize_with = "nullable")]
    pub contact_email: String,
    #[serde(deserialize_with = "nullable")]
    pub contact_phone: String,
    pub sponsorship_level: SponsorshipLevel,
    pub status: SponsorStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub benefits: String,
    #[serde(deserialize_with = "nullable")]
    pub is_featured: bool,
    #[serde(deserialize_with = "nullable")]
    pub social_media: SponsorSocial,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
}

impl Identified for Sponsor {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SponsorPayload {
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo_url: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub sponsorship_level: SponsorshipLevel,
    pub status: SponsorStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub amount: Option<f64>,
    pub benefits: String,
    pub is_featured: bool,
    pub social_media: SponsorSocial,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_falls_back_to_unknown() {
        let sponsor: Sponsor =
            serde_json::from_str(r#"{"id": 3, "sponsorship_level": "diamond", "status": null}"#)
                .unwrap();
        assert_eq!(
            sponsor.sponsorship_level,
            SponsorshipLevel::Unknown("diamond".into())
        );
        assert_eq!(sponsor.status, SponsorStatus::Active);
        assert_eq!(SponsorshipLevel::options().len(), 4);
    }
}
