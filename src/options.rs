use rand::seq::SliceRandom;
use serde::Serialize;

use crate::models::RenderingStyle;

pub const SCENE_PROMPT_OPTIONS: &[&str] = &[
    "A corporate meeting table",
    "A minimalist wooden desk with a single plant",
    "On a stack of high-fashion magazines",
    "Next to a sleek laptop on a modern office desk",
    "On a polished concrete surface with dramatic lighting",
    "Resting on a luxurious black velvet cloth",
    "On a rustic, weathered wooden plank",
    "Atop a marble kitchen counter with soft morning light",
    "Floating on a tranquil water surface with gentle ripples",
    "Nestled in a bed of pristine white sand",
    "On a futuristic, glowing neon grid surface",
    "Atop a stack of antique leather-bound books",
    "On a bed of lush green moss in an enchanted forest",
    "Placed on a reflective, mirror-like surface showing the sky",
    "Against a backdrop of shattered glass, artistically arranged",
    "In the center of a spartan, brutalist concrete room",
    "On a pedestal in a minimalist art gallery",
    "Amongst scattered autumn leaves on a forest floor",
    "On a vintage wooden crate surrounded by dried flowers",
    "On a sleek, minimalist charging pad",
    "Partially submerged in a pool of liquid gold",
    "Amongst professional camera lenses and equipment",
];

pub const BACKGROUND_PROMPT_OPTIONS: &[&str] = &[
    "A luxury marble/stone background",
    "A soft, out-of-focus photography studio background",
    "A dramatic, moody, dark, cinematic background",
    "A clean, bright, minimalist white background",
    "A warm, sunlit interior with soft, blurry shadows",
    "An abstract, futuristic geometric pattern background",
    "A richly textured, dark wood panel background",
    "A brushed metal surface with subtle reflections",
    "An industrial chic background with exposed brick and metal pipes",
    "A vibrant, colorful bokeh light background, out of focus",
    "A serene Japanese zen garden with raked sand patterns",
    "An underwater scene with gentle light rays filtering through",
    "A galaxy/nebula cosmic background with swirling colors",
    "A close-up of intricate, shimmering silk fabric",
    "A holographic, iridescent, shifting color background",
    "A distressed, peeling paint texture on an old wall",
    "An infinite white void, creating a floating effect",
    "A tropical leaf pattern with deep green hues",
    "An out-of-focus high-tech server room with glowing LEDs",
    "A single, powerful spotlight beam cutting through darkness",
    "A background of flowing, liquid metal",
];

pub const ANGLE_VIEW_OPTIONS: &[&str] = &[
    "Slightly angled",
    "Directly overhead (top-down)",
    "Low angle",
    "High angle",
    "Eye-level",
    "Dutch angle (tilted)",
    "Three-quarters",
    "Hero angle (low angle looking up)",
];

pub const CAMERA_SHOT_TYPE_OPTIONS: &[&str] = &[
    "Medium shot",
    "Close-up",
    "Extreme close-up",
    "Macro shot",
    "Full shot",
    "Product hero shot",
    "Detailed texture shot",
];

pub const LIGHTING_STYLE_OPTIONS: &[&str] = &[
    "Soft, diffused studio lighting",
    "Dramatic, high-contrast side lighting",
    "Warm, golden hour sunlight",
    "Cinematic neon and synthwave lighting",
    "Bright, clean, high-key lighting",
    "Moody, dark, low-key lighting",
    "Natural, overcast day lighting",
    "Backlit with a strong halo effect",
    "Split lighting (half in shadow)",
    "Rim lighting to highlight edges",
];

pub const COLOR_SCHEME_OPTIONS: &[&str] = &[
    "Vibrant and saturated",
    "Monochromatic with varying shades",
    "Pastel and muted tones",
    "Analogous (neighboring colors)",
    "Complementary (opposite colors)",
    "Earthy and natural tones",
    "Dark and moody with a single accent color",
    "Minimalist black and white",
    "Triadic color scheme for high contrast",
    "High-tech cyan and magenta",
];

pub const QA_CHECKLIST_ITEMS: &[&str] = &[
    "Clean logo (foil + debossed look)",
    "Sharp leather crosshatch (at 200% zoom)",
    "Phone frame/buttons are 100% correct",
    "No warping or AI artifacts visible",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LogoFinishOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LogoFinishCategory {
    pub category: &'static str,
    pub options: &'static [LogoFinishOption],
}

const fn finish(id: &'static str, name: &'static str, description: &'static str) -> LogoFinishOption {
    LogoFinishOption { id, name, description }
}

pub const LOGO_FINISH_CATEGORIES: &[LogoFinishCategory] = &[
    LogoFinishCategory {
        category: "Metallic Foils",
        options: &[
            finish("gold-foil", "Gold Foil Stamped", "Classic 24k gold, pressed into the leather for a sharp, luxurious indent."),
            finish("silver-foil", "Silver Foil Stamped", "Bright, modern silver, pressed in for a clean, high-tech look."),
            finish("rose-gold-foil", "Rose Gold Foil Stamped", "Warm, trendy rose gold, debossed for a soft, elegant finish."),
            finish("holographic-foil", "Holographic Foil Stamped", "An iridescent, rainbow-like foil that shifts color with light."),
        ],
    },
    LogoFinishCategory {
        category: "Impressions & Textures",
        options: &[
            finish("blind-deboss", "Blind Debossed", "A subtle, sophisticated indentation with no color, just texture."),
            finish("high-gloss-emboss", "Raised High-Gloss Emboss", "The logo is raised from the surface with a shiny, clear coating."),
            finish("matte-print", "Matte White Print", "A flat, non-reflective white print directly on the leather surface."),
            finish("gloss-black-print", "Gloss Black Print", "A slightly raised, shiny black print that contrasts with the leather."),
        ],
    },
    LogoFinishCategory {
        category: "Modern & Artistic",
        options: &[
            finish("metal-inlay", "Polished Metal Inlay", "A solid piece of polished metal set flush into the leather surface."),
            finish("laser-engraved", "Laser Engraved", "The logo is burned into the leather, creating a dark, rustic effect."),
            finish("tone-on-tone", "Tone-on-Tone Varnish", "A clear, glossy varnish in the shape of the logo for a subtle, wet look."),
            finish("liquid-metal", "Liquid Metal Effect", "A futuristic, chrome-like raised finish that appears fluid."),
            finish("iridescent-uv", "Iridescent UV Print", "A vibrant, color-shifting print that mimics oil on water."),
            finish("anodized-aluminum", "Anodized Aluminum Insert", "A brushed aluminum piece inlaid for a sleek, durable finish."),
        ],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn style_option(style: RenderingStyle) -> StyleOption {
    let (name, description) = match style {
        RenderingStyle::Photorealistic => ("Imagen 4.0 - Photorealistic", "Creates hyperrealistic, professional product photos."),
        RenderingStyle::Artistic => ("Imagen 4.0 - Artistic Rendering", "Generates a more stylized, artistic interpretation of the product."),
        RenderingStyle::Sketch => ("Imagen 4.0 - Concept Sketch", "Produces a clean, black and white concept sketch of the product."),
        RenderingStyle::Clay => ("Imagen 4.0 - Clay Model", "Renders the product as a neutral, monochrome clay model to emphasize form."),
        RenderingStyle::Blueprint => ("Imagen 4.0 - Blueprint Schematic", "Creates a technical blueprint-style drawing with annotations."),
        RenderingStyle::Vintage => ("Imagen 4.0 - Vintage Photo", "Simulates a product photo taken with vintage film camera equipment."),
    };
    StyleOption { id: style.id(), name, description }
}

/// Everything the form needs to populate its pickers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    pub scene_prompts: &'static [&'static str],
    pub background_prompts: &'static [&'static str],
    pub angle_views: &'static [&'static str],
    pub camera_shot_types: &'static [&'static str],
    pub lighting_styles: &'static [&'static str],
    pub color_schemes: &'static [&'static str],
    pub logo_finishes: &'static [LogoFinishCategory],
    pub rendering_styles: Vec<StyleOption>,
    pub qa_checklist: &'static [&'static str],
}

pub fn catalog() -> OptionCatalog {
    OptionCatalog {
        scene_prompts: SCENE_PROMPT_OPTIONS,
        background_prompts: BACKGROUND_PROMPT_OPTIONS,
        angle_views: ANGLE_VIEW_OPTIONS,
        camera_shot_types: CAMERA_SHOT_TYPE_OPTIONS,
        lighting_styles: LIGHTING_STYLE_OPTIONS,
        color_schemes: COLOR_SCHEME_OPTIONS,
        logo_finishes: LOGO_FINISH_CATEGORIES,
        rendering_styles: RenderingStyle::ALL.into_iter().map(style_option).collect(),
        qa_checklist: QA_CHECKLIST_ITEMS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspireTarget {
    Scene,
    Background,
}

impl InspireTarget {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "scene" | "sceneprompt" => Some(InspireTarget::Scene),
            "background" | "backgroundprompt" => Some(InspireTarget::Background),
            _ => None,
        }
    }
}

/// "Inspire me": a random scene or background description.
pub fn inspire(target: InspireTarget) -> &'static str {
    let pool = match target {
        InspireTarget::Scene => SCENE_PROMPT_OPTIONS,
        InspireTarget::Background => BACKGROUND_PROMPT_OPTIONS,
    };
    pool.choose(&mut rand::thread_rng()).copied().unwrap_or(pool[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspire_draws_from_the_matching_pool() {
        for _ in 0..20 {
            assert!(SCENE_PROMPT_OPTIONS.contains(&inspire(InspireTarget::Scene)));
            assert!(BACKGROUND_PROMPT_OPTIONS.contains(&inspire(InspireTarget::Background)));
        }
    }

    #[test]
    fn inspire_target_accepts_form_field_names() {
        assert_eq!(InspireTarget::parse("scenePrompt"), Some(InspireTarget::Scene));
        assert_eq!(InspireTarget::parse("background"), Some(InspireTarget::Background));
        assert_eq!(InspireTarget::parse("lighting"), None);
    }

    #[test]
    fn catalog_lists_every_style() {
        let ids: Vec<_> = catalog().rendering_styles.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["photorealistic", "artistic", "sketch", "clay", "blueprint", "vintage"]);
    }
}
