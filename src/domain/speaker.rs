use serde::{Deserialize, Serialize};

use crate::domain::types::{Identified, RecordId, lenient_f64, nullable};

/// Social profile links shared by speakers and attendees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfiles {
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter: String,
    #[serde(deserialize_with = "nullable")]
    pub github: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speaker {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub bio: String,
    #[serde(deserialize_with = "nullable")]
    pub expertise: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub position: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(deserialize_with = "nullable")]
    pub social_media: SocialProfiles,
    #[serde(deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub is_featured: bool,
    #[serde(deserialize_with = "nullable")]
    pub availability: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
}

impl Speaker {
    /// Case-insensitive match over name, expertise and company.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.expertise.to_lowercase().contains(&needle)
            || self.company.to_lowercase().contains(&needle)
    }

    /// Up to two upper-cased initials used when no image is available.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Number of filled stars out of five.
    pub fn stars(&self) -> usize {
        self.rating.unwrap_or(0.0).clamp(0.0, 5.0).floor() as usize
    }
}

impl Identified for Speaker {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeakerPayload {
    pub name: String,
    pub bio: String,
    pub expertise: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub website: String,
    pub social_media: SocialProfiles,
    pub image_url: String,
    pub is_featured: bool,
    pub availability: String,
    pub rating: Option<f64>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_record() {
        let speaker: Speaker = serde_json::from_str(
            r#"{"id": "s1", "name": "Ada Lovelace", "social_media": null, "rating": "4.5", "tags": null}"#,
        )
        .unwrap();
        assert_eq!(speaker.id.as_str(), "s1");
        assert_eq!(speaker.social_media, SocialProfiles::default());
        assert_eq!(speaker.rating, Some(4.5));
        assert!(speaker.tags.is_empty());
        assert_eq!(speaker.initials(), "AL");
        assert_eq!(speaker.stars(), 4);
    }

    #[test]
    fn search_covers_expertise_and_company() {
        let speaker = Speaker {
            name: "Grace".into(),
            expertise: "Compilers".into(),
            company: "Navy".into(),
            ..Default::default()
        };
        assert!(speaker.matches_search("compil"));
        assert!(speaker.matches_search("navy"));
        assert!(!speaker.matches_search("cloud"));
    }
}
