use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::speaker::{SocialProfiles, Speaker, SpeakerPayload};
use crate::domain::types::{join_tags, parse_float, split_tags};
use crate::forms::{Draft, FormError, checkbox, number_input_value, optional_url};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
/// Editable draft of a speaker.
pub struct SpeakerForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub bio: String,
    #[validate(length(min = 1))]
    pub expertise: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    pub company: String,
    pub position: String,
    #[validate(custom(function = "optional_url"))]
    pub website: String,
    pub social_linkedin: String,
    pub social_twitter: String,
    pub social_github: String,
    #[validate(custom(function = "optional_url"))]
    pub image_url: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_featured: bool,
    pub availability: String,
    pub rating: String,
    /// Comma separated tags.
    pub tags: String,
}

impl Default for SpeakerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            bio: String::new(),
            expertise: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            position: String::new(),
            website: String::new(),
            social_linkedin: String::new(),
            social_twitter: String::new(),
            social_github: String::new(),
            image_url: String::new(),
            is_featured: false,
            availability: String::new(),
            rating: "0".to_string(),
            tags: String::new(),
        }
    }
}

impl Draft for SpeakerForm {
    type Record = Speaker;
    type Payload = SpeakerPayload;

    fn from_record(speaker: &Speaker) -> Self {
        Self {
            name: speaker.name.clone(),
            bio: speaker.bio.clone(),
            expertise: speaker.expertise.clone(),
            email: speaker.email.clone(),
            phone: speaker.phone.clone(),
            company: speaker.company.clone(),
            position: speaker.position.clone(),
            website: speaker.website.clone(),
            social_linkedin: speaker.social_media.linkedin.clone(),
            social_twitter: speaker.social_media.twitter.clone(),
            social_github: speaker.social_media.github.clone(),
            image_url: speaker.image_url.clone(),
            is_featured: speaker.is_featured,
            availability: speaker.availability.clone(),
            rating: number_input_value(speaker.rating),
            tags: join_tags(&speaker.tags),
        }
    }

    fn to_payload(&self) -> Result<SpeakerPayload, FormError> {
        self.validate()?;
        let rating = match self.rating.trim() {
            "" => None,
            raw => match parse_float(raw) {
                Some(value) if (0.0..=5.0).contains(&value) => Some(value),
                _ => {
                    return Err(FormError::InvalidNumber {
                        field: "rating",
                        value: raw.to_string(),
                    });
                }
            },
        };

        Ok(SpeakerPayload {
            name: self.name.trim().to_string(),
            bio: self.bio.clone(),
            expertise: self.expertise.clone(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            position: self.position.clone(),
            website: self.website.trim().to_string(),
            social_media: SocialProfiles {
                linkedin: self.social_linkedin.clone(),
                twitter: self.social_twitter.clone(),
                github: self.social_github.clone(),
            },
            image_url: self.image_url.trim().to_string(),
            is_featured: self.is_featured,
            availability: self.availability.clone(),
            rating,
            tags: split_tags(&self.tags),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RecordId;

    fn filled_form() -> SpeakerForm {
        SpeakerForm {
            name: "Ada Lovelace".into(),
            bio: "First programmer".into(),
            expertise: "Algorithms".into(),
            email: "ada@example.com".into(),
            phone: "+44 20 7946 0000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn edit_joins_tags() {
        let speaker = Speaker {
            id: RecordId::new("s1").unwrap(),
            name: "Ada".into(),
            tags: vec!["ai".into(), "cloud".into()],
            rating: Some(4.5),
            ..Default::default()
        };
        let form = SpeakerForm::from_record(&speaker);
        assert_eq!(form.tags, "ai, cloud");
        assert_eq!(form.rating, "4.5");
    }

    #[test]
    fn submit_nests_social_links_and_splits_tags() {
        let form = SpeakerForm {
            social_github: "ada".into(),
            tags: "math , engines".into(),
            rating: "5".into(),
            ..filled_form()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.social_media.github, "ada");
        assert_eq!(payload.tags, vec!["math".to_string(), "engines".to_string()]);
        assert_eq!(payload.rating, Some(5.0));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let form = SpeakerForm {
            rating: "7".into(),
            ..filled_form()
        };
        assert!(matches!(
            form.to_payload(),
            Err(FormError::InvalidNumber { field: "rating", .. })
        ));
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        let form = SpeakerForm::default();
        assert!(matches!(form.to_payload(), Err(FormError::Validation(_))));
    }
}
