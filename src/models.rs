use std::collections::BTreeMap;
use std::fmt;

use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use uuid::Uuid;

use crate::options;

/// Named reference-image slots. Every slot is required before a run may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputSlot {
    LeatherPattern,
    CaseBack,
    CaseRight,
    CaseLeft,
    CaseTop,
    CaseBottom,
    CaseCamera,
    Logo,
    DepthMap,
}

impl InputSlot {
    pub const ALL: [InputSlot; 9] = [
        InputSlot::LeatherPattern,
        InputSlot::CaseBack,
        InputSlot::CaseRight,
        InputSlot::CaseLeft,
        InputSlot::CaseTop,
        InputSlot::CaseBottom,
        InputSlot::CaseCamera,
        InputSlot::Logo,
        InputSlot::DepthMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSlot::LeatherPattern => "leatherPattern",
            InputSlot::CaseBack => "caseBack",
            InputSlot::CaseRight => "caseRight",
            InputSlot::CaseLeft => "caseLeft",
            InputSlot::CaseTop => "caseTop",
            InputSlot::CaseBottom => "caseBottom",
            InputSlot::CaseCamera => "caseCamera",
            InputSlot::Logo => "logo",
            InputSlot::DepthMap => "depthMap",
        }
    }
}

impl fmt::Display for InputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded reference images, treated as opaque blobs.
#[derive(Debug, Clone, Default)]
pub struct InputSet {
    slots: BTreeMap<InputSlot, Bytes>,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, slot: InputSlot, payload: impl Into<Bytes>) -> Self {
        self.set(slot, payload);
        self
    }

    /// Empty payloads count as an empty slot.
    pub fn set(&mut self, slot: InputSlot, payload: impl Into<Bytes>) {
        let payload = payload.into();
        if payload.is_empty() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, payload);
        }
    }

    #[cfg(test)]
    pub fn clear(&mut self, slot: InputSlot) {
        self.slots.remove(&slot);
    }

    #[cfg(test)]
    pub fn get(&self, slot: InputSlot) -> Option<&Bytes> {
        self.slots.get(&slot)
    }

    pub fn missing_slots(&self) -> Vec<InputSlot> {
        InputSlot::ALL
            .into_iter()
            .filter(|slot| !self.slots.contains_key(slot))
            .collect()
    }
}

/// Wire form of [`InputSet`]: one optional base64 string per slot.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputPayload {
    #[serde_as(as = "Option<Base64>")]
    pub leather_pattern: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub case_back: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub case_right: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub case_left: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub case_top: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub case_bottom: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub case_camera: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub logo: Option<Vec<u8>>,
    #[serde_as(as = "Option<Base64>")]
    pub depth_map: Option<Vec<u8>>,
}

impl From<InputPayload> for InputSet {
    fn from(p: InputPayload) -> Self {
        let pairs = [
            (InputSlot::LeatherPattern, p.leather_pattern),
            (InputSlot::CaseBack, p.case_back),
            (InputSlot::CaseRight, p.case_right),
            (InputSlot::CaseLeft, p.case_left),
            (InputSlot::CaseTop, p.case_top),
            (InputSlot::CaseBottom, p.case_bottom),
            (InputSlot::CaseCamera, p.case_camera),
            (InputSlot::Logo, p.logo),
            (InputSlot::DepthMap, p.depth_map),
        ];
        let mut set = InputSet::new();
        for (slot, payload) in pairs {
            if let Some(bytes) = payload {
                set.set(slot, bytes);
            }
        }
        set
    }
}

/// Visual treatment selecting the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingStyle {
    Artistic,
    Sketch,
    Clay,
    Blueprint,
    Vintage,
    /// Unknown style ids land here.
    #[default]
    #[serde(other)]
    Photorealistic,
}

impl RenderingStyle {
    pub const ALL: [RenderingStyle; 6] = [
        RenderingStyle::Photorealistic,
        RenderingStyle::Artistic,
        RenderingStyle::Sketch,
        RenderingStyle::Clay,
        RenderingStyle::Blueprint,
        RenderingStyle::Vintage,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RenderingStyle::Photorealistic => "photorealistic",
            RenderingStyle::Artistic => "artistic",
            RenderingStyle::Sketch => "sketch",
            RenderingStyle::Clay => "clay",
            RenderingStyle::Blueprint => "blueprint",
            RenderingStyle::Vintage => "vintage",
        }
    }

    /// Monochrome, line-art and schematic styles drop every color clause.
    pub fn has_color(&self) -> bool {
        !matches!(
            self,
            RenderingStyle::Sketch | RenderingStyle::Clay | RenderingStyle::Blueprint
        )
    }
}

/// Camera-facing orientation of a generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    Angled,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Front => "Front",
            View::Back => "Back",
            View::Left => "Left",
            View::Right => "Right",
            View::Top => "Top",
            View::Bottom => "Bottom",
            View::Angled => "Angled",
        }
    }

    /// File name offered by the download endpoint.
    pub fn download_file_name(&self) -> String {
        format!("generated-case-{}-8k.jpeg", self.as_str().to_lowercase())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text and enumerated form fields describing the product and the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductParameters {
    pub product_name: String,
    pub product_height: String,
    pub product_width: String,
    pub product_depth: String,
    pub case_thickness: String,
    pub leather_pattern_name: String,
    pub logo_name: String,
    pub logo_finish: String,
    pub logo_color: String,
    pub background_prompt: String,
    pub scene_prompt: String,
    pub angle_view: String,
    pub camera_shot_type: String,
    pub lighting_style: String,
    pub color_scheme: String,
    pub ai_model: RenderingStyle,
}

impl Default for ProductParameters {
    fn default() -> Self {
        Self {
            product_name: "iPhone 16 Pro Max".into(),
            product_height: "160.8".into(),
            product_width: "78.1".into(),
            product_depth: "7.65".into(),
            case_thickness: "3".into(),
            leather_pattern_name: "Saffiano".into(),
            logo_name: "FAIMBD".into(),
            logo_finish: options::LOGO_FINISH_CATEGORIES[0].options[0].name.into(),
            logo_color: "Gold".into(),
            background_prompt: options::BACKGROUND_PROMPT_OPTIONS[0].into(),
            scene_prompt: options::SCENE_PROMPT_OPTIONS[0].into(),
            angle_view: options::ANGLE_VIEW_OPTIONS[0].into(),
            camera_shot_type: options::CAMERA_SHOT_TYPE_OPTIONS[0].into(),
            lighting_style: options::LIGHTING_STYLE_OPTIONS[0].into(),
            color_scheme: options::COLOR_SCHEME_OPTIONS[0].into(),
            ai_model: RenderingStyle::Photorealistic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Generated,
    Placeholder,
}

/// A displayable image: raw bytes plus their mime type.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub mime_type: String,
    pub data: Bytes,
    pub source: ImageSource,
}

impl ImageRef {
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.data)
        )
    }
}

#[derive(Debug, Clone)]
pub struct StoredImage {
    pub image: ImageRef,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

/// Summary of a stored image, without the payload.
#[derive(Debug, Clone, Serialize)]
pub struct StoredImageInfo {
    pub view: View,
    pub mime_type: String,
    pub source: ImageSource,
    pub size_bytes: usize,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

/// Generated images keyed by view. Entries accumulate for the life of the process.
#[derive(Debug, Default)]
pub struct GenerationResult {
    images: BTreeMap<View, StoredImage>,
}

impl GenerationResult {
    pub fn insert(&mut self, view: View, image: ImageRef, run_id: Uuid) {
        self.images.insert(
            view,
            StoredImage {
                image,
                run_id,
                generated_at: Utc::now(),
            },
        );
    }

    pub fn get(&self, view: View) -> Option<&StoredImage> {
        self.images.get(&view)
    }

    pub fn summaries(&self) -> Vec<StoredImageInfo> {
        self.images
            .iter()
            .map(|(view, stored)| StoredImageInfo {
                view: *view,
                mime_type: stored.image.mime_type.clone(),
                source: stored.image.source,
                size_bytes: stored.image.data.len(),
                run_id: stored.run_id,
                generated_at: stored.generated_at,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub inputs: InputPayload,
    #[serde(default)]
    pub parameters: ProductParameters,
    #[serde(default)]
    pub view: View,
}
