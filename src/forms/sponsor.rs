use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::sponsor::{
    Sponsor, SponsorPayload, SponsorSocial, SponsorStatus, SponsorshipLevel,
};
use crate::domain::types::parse_float;
use crate::forms::{
    Draft, FormError, checkbox, date_input_value, non_empty, number_input_value, optional_url,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
/// Editable draft of a sponsor.
pub struct SponsorForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(url)]
    pub website: String,
    #[validate(custom(function = "optional_url"))]
    pub logo_url: String,
    #[validate(length(min = 1))]
    pub contact_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(length(min = 1))]
    pub contact_phone: String,
    pub sponsorship_level: String,
    pub status: String,
    /// `date` input values.
    #[validate(length(min = 1))]
    pub start_date: String,
    #[validate(length(min = 1))]
    pub end_date: String,
    #[validate(length(min = 1))]
    pub amount: String,
    pub benefits: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_featured: bool,
    pub social_linkedin: String,
    pub social_twitter: String,
    pub social_facebook: String,
    pub notes: String,
}

impl Default for SponsorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            website: String::new(),
            logo_url: String::new(),
            contact_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            sponsorship_level: SponsorshipLevel::default().to_string(),
            status: SponsorStatus::default().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            amount: String::new(),
            benefits: String::new(),
            is_featured: false,
            social_linkedin: String::new(),
            social_twitter: String::new(),
            social_facebook: String::new(),
            notes: String::new(),
        }
    }
}

impl Draft for SponsorForm {
    type Record = Sponsor;
    type Payload = SponsorPayload;

    fn from_record(sponsor: &Sponsor) -> Self {
        Self {
            name: sponsor.name.clone(),
            description: sponsor.description.clone(),
            website: sponsor.website.clone(),
            logo_url: sponsor.logo_url.clone(),
            contact_name: sponsor.contact_name.clone(),
            contact_email: sponsor.contact_email.clone(),
            contact_phone: sponsor.contact_phone.clone(),
            sponsorship_level: sponsor.sponsorship_level.to_string(),
            status: sponsor.status.to_string(),
            start_date: date_input_value(sponsor.start_date.as_deref()),
            end_date: date_input_value(sponsor.end_date.as_deref()),
            amount: number_input_value(sponsor.amount),
            benefits: sponsor.benefits.clone(),
            is_featured: sponsor.is_featured,
            social_linkedin: sponsor.social_media.linkedin.clone(),
            social_twitter: sponsor.social_media.twitter.clone(),
            social_facebook: sponsor.social_media.facebook.clone(),
            notes: sponsor.notes.clone(),
        }
    }

    fn to_payload(&self) -> Result<SponsorPayload, FormError> {
        self.validate()?;
        let amount = parse_float(&self.amount).ok_or_else(|| FormError::InvalidNumber {
            field: "amount",
            value: self.amount.clone(),
        })?;

        Ok(SponsorPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            website: self.website.trim().to_string(),
            logo_url: self.logo_url.trim().to_string(),
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.trim().to_string(),
            contact_phone: self.contact_phone.clone(),
            sponsorship_level: SponsorshipLevel::from(self.sponsorship_level.as_str()),
            status: SponsorStatus::from(self.status.as_str()),
            start_date: non_empty(&self.start_date),
            end_date: non_empty(&self.end_date),
            amount: Some(amount),
            benefits: self.benefits.clone(),
            is_featured: self.is_featured,
            social_media: SponsorSocial {
                linkedin: self.social_linkedin.clone(),
                twitter: self.social_twitter.clone(),
                facebook: self.social_facebook.clone(),
            },
            notes: self.notes.clone(),
        })
    }
}
