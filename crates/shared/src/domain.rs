use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_unset(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(FestivalId);
id_newtype!(ImageId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Professional,
    Vibrant,
    Elegant,
    Minimal,
    Traditional,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Professional,
        Style::Vibrant,
        Style::Elegant,
        Style::Minimal,
        Style::Traditional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Vibrant => "vibrant",
            Style::Elegant => "elegant",
            Style::Minimal => "minimal",
            Style::Traditional => "traditional",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Professional => "Professional",
            Style::Vibrant => "Vibrant",
            Style::Elegant => "Elegant",
            Style::Minimal => "Minimal",
            Style::Traditional => "Traditional",
        }
    }
}

impl FromStr for Style {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("style", s))
    }
}

/// Output frame shape requested from the generator. Serialized as the literal
/// ratio string the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Story,
    #[serde(rename = "4:5")]
    Feed,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Story,
        AspectRatio::Feed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Story => "9:16",
            AspectRatio::Feed => "4:5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1) - Instagram Post",
            AspectRatio::Landscape => "Landscape (16:9) - Facebook",
            AspectRatio::Story => "Portrait (9:16) - Instagram Story",
            AspectRatio::Feed => "Portrait (4:5) - Instagram Feed",
        }
    }
}

impl FromStr for AspectRatio {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s.trim())
            .ok_or_else(|| UnknownVariant::new("aspect ratio", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
