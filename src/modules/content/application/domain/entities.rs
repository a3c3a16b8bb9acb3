use serde::{Deserialize, Serialize};

/// The three singleton sections of the landing page, each stored as one
/// JSON blob row keyed by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Hero,
    About,
    ExpertiseAreas,
}

impl ContentKind {
    /// Value of the `content_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Hero => "hero_content",
            ContentKind::About => "about_content",
            ContentKind::ExpertiseAreas => "expertise_areas",
        }
    }

    /// Path segment used by the content routes.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "hero" => Some(ContentKind::Hero),
            "about" => Some(ContentKind::About),
            "expertise" => Some(ContentKind::ExpertiseAreas),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroFeature {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<HeroFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutFeature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub main_description: Vec<String>,
    pub features: Vec<AboutFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseArea {
    pub title: String,
    pub description: String,
}

/// Checks that a payload matches the shape its kind promises before it
/// is persisted. The stored blob is always one of the three types above.
pub fn validate_payload(kind: ContentKind, payload: &serde_json::Value) -> Result<(), String> {
    let result = match kind {
        ContentKind::Hero => {
            serde_json::from_value::<HeroContent>(payload.clone()).map(|_| ())
        }
        ContentKind::About => {
            serde_json::from_value::<AboutContent>(payload.clone()).map(|_| ())
        }
        ContentKind::ExpertiseAreas => {
            serde_json::from_value::<Vec<ExpertiseArea>>(payload.clone()).map(|_| ())
        }
    };

    result.map_err(|e| e.to_string())
}
