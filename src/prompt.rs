use crate::models::{ProductParameters, RenderingStyle, View};

/// Angle phrase forced onto the synthetic angled composite.
pub const ANGLED_HERO_PHRASE: &str = "Three-quarters hero angle";

struct StyleTemplate {
    prefix: &'static str,
    suffix: &'static str,
}

fn template(style: RenderingStyle) -> StyleTemplate {
    match style {
        RenderingStyle::Photorealistic => StyleTemplate {
            prefix: "A hyperrealistic photograph of",
            suffix: "Award-winning professional product photography. Extremely detailed, sharp focus, shallow depth of field (bokeh). Rendered in stunning, ultra-high 8K resolution. Photorealistic quality, as if shot on a high-end DSLR camera.",
        },
        RenderingStyle::Artistic => StyleTemplate {
            prefix: "An artistic, stylized rendering of",
            suffix: "A digital painting with vibrant colors and expressive brush strokes. A unique piece of digital art suitable for a high-fashion magazine cover. Rendered in 8K.",
        },
        RenderingStyle::Sketch => StyleTemplate {
            prefix: "A detailed, monochrome concept sketch of",
            suffix: "A clean, black and white line art drawing. Focus on form and structure, like an industrial design blueprint. Minimalist aesthetic. Rendered in 8K.",
        },
        RenderingStyle::Clay => StyleTemplate {
            prefix: "A studio photograph of a monochrome clay model of",
            suffix: "Matte finish, uniform grey color. Perfect, even studio lighting to highlight contours and shape. No textures, logos, or colors. Focus on 3D form. Rendered in 8K.",
        },
        RenderingStyle::Blueprint => StyleTemplate {
            prefix: "A technical blueprint schematic of",
            suffix: "White lines on a blue background. Includes dimensional callouts, annotations, and construction lines. Extremely precise and detailed, like a CAD drawing. Rendered in 8K.",
        },
        RenderingStyle::Vintage => StyleTemplate {
            prefix: "A vintage 1970s film photograph of",
            suffix: "Shot on Kodak Portra 400 film. Warm color tones, soft focus, and natural grain. Retro, nostalgic aesthetic. Slight lens flare and vignetting. Rendered in 8K.",
        },
    }
}

/// Renders the form parameters into the instruction sent to the image model.
///
/// Deterministic: the same parameters and view always yield the same string.
pub fn build_prompt(p: &ProductParameters, view: View) -> String {
    let StyleTemplate { prefix, suffix } = template(p.ai_model);
    let has_color = p.ai_model.has_color();
    let angle = if view == View::Angled {
        ANGLED_HERO_PHRASE
    } else {
        p.angle_view.as_str()
    };

    let logo_color = if has_color {
        format!(" The color should be a rich {}.", p.logo_color)
    } else {
        String::new()
    };
    let palette = if has_color {
        format!(
            "\n- **Color Palette**: The overall image should adhere to a \"{}\" color scheme.",
            p.color_scheme
        )
    } else {
        String::new()
    };

    format!(
        r#"
**Primary Subject**: {prefix} a premium "{pattern}" leather phone case designed for the "{product}".
- **Phone Dimensions**: {height}mm (H) x {width}mm (W) x {depth}mm (D).
- **Case Thickness**: {thickness}mm.

**Logo Specifications**:
- **Brand Name**: "{logo}"
- **Application**: The logo should be rendered with a "{finish}" finish.{logo_color} The application should be precise and clean.

**Photographic Composition**:
- **Viewpoint**: A professional {shot} of the case from the {view} view, captured at a {angle}.

**Scene & Ambiance**:
- **Setting**: The case is placed within a sophisticated scene: "{scene}".
- **Background**: The backdrop is "{background}", creating a cohesive and professional atmosphere.
- **Lighting**: The scene is illuminated by "{lighting}", designed to accentuate the leather texture and the logo finish. The lighting should create realistic reflections and soft shadows.{palette}

**Mandatory Quality Directives**:
- **Core Style**: {suffix}
- **Texture Detail**: The "{pattern}" leather must be hyper-detailed, with a clearly visible and sharp cross-hatch pattern, especially when zoomed in.
- **Logo Integrity**: The "{logo}" logo must be perfectly legible, crisp, and accurately represent the specified "{finish}".
- **Physical Accuracy**: The phone case must have clean, precise edges and cutouts. There should be no warping, melting, or other AI-generated artifacts. The interaction between the case and the surface it rests on must be physically believable.
- **Overall Impression**: The final image must be of the highest professional quality, suitable for a luxury brand's marketing campaign.
"#,
        pattern = p.leather_pattern_name,
        product = p.product_name,
        height = p.product_height,
        width = p.product_width,
        depth = p.product_depth,
        thickness = p.case_thickness,
        logo = p.logo_name,
        finish = p.logo_finish,
        shot = p.camera_shot_type,
        scene = p.scene_prompt,
        background = p.background_prompt,
        lighting = p.lighting_style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(style: RenderingStyle) -> ProductParameters {
        ProductParameters {
            logo_color: "Burnt Sienna".into(),
            color_scheme: "Teal and orange grading".into(),
            ai_model: style,
            ..ProductParameters::default()
        }
    }

    #[test]
    fn builder_is_deterministic() {
        let p = params(RenderingStyle::Vintage);
        assert_eq!(build_prompt(&p, View::Left), build_prompt(&p, View::Left));
    }

    #[test]
    fn monochrome_styles_drop_color_clauses() {
        for style in RenderingStyle::ALL {
            let prompt = build_prompt(&params(style), View::Front);
            let colored = prompt.contains("Burnt Sienna") && prompt.contains("Teal and orange grading");
            let colorless = !prompt.contains("Burnt Sienna") && !prompt.contains("Teal and orange grading");
            match style {
                RenderingStyle::Sketch | RenderingStyle::Clay | RenderingStyle::Blueprint => {
                    assert!(colorless, "{style:?} leaked a color clause")
                }
                _ => assert!(colored, "{style:?} lost a color clause"),
            }
        }
    }

    #[test]
    fn angled_view_overrides_configured_angle() {
        for angle in crate::options::ANGLE_VIEW_OPTIONS {
            let p = ProductParameters {
                angle_view: angle.to_string(),
                ..ProductParameters::default()
            };
            let prompt = build_prompt(&p, View::Angled);
            assert!(prompt.contains("from the Angled view, captured at a Three-quarters hero angle."));
        }
    }

    #[test]
    fn other_views_use_configured_angle_verbatim() {
        let p = ProductParameters {
            angle_view: "Dutch angle (tilted)".into(),
            ..ProductParameters::default()
        };
        let prompt = build_prompt(&p, View::Top);
        assert!(prompt.contains("from the Top view, captured at a Dutch angle (tilted)."));
        assert!(!prompt.contains(ANGLED_HERO_PHRASE));
    }

    #[test]
    fn embeds_every_creative_parameter() {
        let p = ProductParameters::default();
        let prompt = build_prompt(&p, View::Front);
        for needle in [
            "A hyperrealistic photograph of a premium \"Saffiano\" leather phone case designed for the \"iPhone 16 Pro Max\".",
            "160.8mm (H) x 78.1mm (W) x 7.65mm (D).",
            "**Case Thickness**: 3mm.",
            "**Brand Name**: \"FAIMBD\"",
            "rendered with a \"Gold Foil Stamped\" finish. The color should be a rich Gold.",
            "A professional Medium shot of the case",
            "\"A corporate meeting table\"",
            "\"A luxury marble/stone background\"",
            "\"Soft, diffused studio lighting\"",
            "adhere to a \"Vibrant and saturated\" color scheme.",
            "Award-winning professional product photography.",
        ] {
            assert!(prompt.contains(needle), "missing: {needle}");
        }
    }
}
