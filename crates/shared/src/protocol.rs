use serde::{Deserialize, Serialize};

use crate::domain::{AspectRatio, FestivalId, ImageId, Style};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalOption {
    pub id: FestivalId,
    pub name: String,
    pub emoji: String,
}

impl FestivalOption {
    pub fn display_label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalsResponse {
    pub festivals: Vec<FestivalOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub business_name: String,
    #[serde(default)]
    pub tagline: String,
    pub festival: FestivalId,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    #[serde(default, alias = "image_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ImageId>,
    pub image_url: String,
    #[serde(default)]
    pub prompt_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival: Option<FestivalId>,
}

/// Summary of a past generation as returned by the image listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: ImageId,
    pub url: String,
    pub business_name: String,
    pub festival: FestivalId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

impl From<&HistoryEntry> for GeneratedImage {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            image_url: entry.url.clone(),
            prompt_used: entry.prompt.clone().unwrap_or_default(),
            business_name: Some(entry.business_name.clone()),
            festival: Some(entry.festival.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_uses_backend_field_spellings() {
        let request = GenerationRequest {
            business_name: "Acme".to_string(),
            tagline: String::new(),
            festival: FestivalId::from("diwali"),
            style: Style::Professional,
            aspect_ratio: AspectRatio::Square,
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "business_name": "Acme",
                "tagline": "",
                "festival": "diwali",
                "style": "professional",
                "aspect_ratio": "1:1",
            })
        );
    }

    #[test]
    fn generated_image_accepts_backend_image_id_field() {
        let image: GeneratedImage = serde_json::from_str(
            r#"{"image_id":"abc","image_url":"http://x/y.png","prompt_used":"p"}"#,
        )
        .expect("decode");

        assert_eq!(image.id, Some(ImageId::from("abc")));
        assert_eq!(image.business_name, None);
    }

    #[test]
    fn history_entry_promotes_to_generated_image() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"id":"h1","url":"http://x/h1.png","business_name":"Acme","festival":"holi","prompt":"holi ad","style":"vibrant"}"#,
        )
        .expect("decode");

        let image = GeneratedImage::from(&entry);
        assert_eq!(image.image_url, "http://x/h1.png");
        assert_eq!(image.prompt_used, "holi ad");
        assert_eq!(image.festival, Some(FestivalId::from("holi")));
    }
}
