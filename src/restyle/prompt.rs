// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt templates for the three generation paths

use super::change_request::ChangeRequest;
use super::styles::{resolve_style, StyleProfile};

/// Negative prompt for whole-room style transforms
pub const STYLE_NEGATIVE_PROMPT: &str = "\
((deformed)), ((distorted)), ((disfigured)), ((poorly drawn)), ((bad anatomy)), ((wrong proportions)),
((blurry)), ((pixelated)), ((grainy)), ((low quality)), ((jpeg artifacts)), ((compression artifacts)),
((watermark)), ((signature)), ((text)), ((logo)),
((unrealistic lighting)), ((bad shadows)), ((harsh lighting)), ((overexposed)), ((underexposed)),
((cartoon)), ((anime)), ((illustration)), ((painting)), ((3d render)), ((cgi)), ((artificial)),
((oversaturated)), ((unrealistic colors)), ((color bleeding)),
((out of frame)), ((cropped)), ((cut off)),
((wrong perspective)), ((distorted space)), ((curved lines)), ((warped surfaces)),
((duplicate)), ((multiple)), ((repeating elements))";

/// Negative prompt for masked region edits
pub const REGION_NEGATIVE_PROMPT: &str = "deformed, distorted, disfigured, poorly drawn, bad anatomy, wrong proportions, blurry, bad hands, cropped, worst quality, low quality, jpeg artifacts, watermark, unnatural lighting, unrealistic, artificial, fake looking, cartoon, anime, illustration, painting, drawing, art, canvas texture, smooth texture, grainy, low-res, pixelated, oversaturated";

/// Negative prompt for free-text customization; also steers away from layout changes
pub const CUSTOMIZE_NEGATIVE_PROMPT: &str = "deformed, distorted, disfigured, poorly drawn, bad anatomy, wrong proportions, blurry, bad hands, cropped, worst quality, low quality, jpeg artifacts, watermark, unnatural lighting, unrealistic, artificial, fake looking, cartoon, anime, illustration, painting, drawing, art, canvas texture, smooth texture, grainy, low-res, pixelated, oversaturated, different layout, different furniture, different room, different perspective";

/// Positive and negative text sent to the generation service
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub prompt: String,
    pub negative_prompt: String,
}

/// Build the style-transfer prompt for a style id; unknown ids use the default style
pub fn style_prompt(style_id: &str) -> PromptPair {
    profile_prompt(resolve_style(style_id))
}

pub fn profile_prompt(profile: &StyleProfile) -> PromptPair {
    let prompt = format!(
        "Transform this interior space into a {main}.

Style requirements:
- Colors: {colors}
- Materials: {materials}
- Furniture: {furniture}
- Lighting: {lighting}
- Atmosphere: {mood}

Critical requirements:
- Maintain the exact room layout and dimensions
- Keep all window and door positions unchanged
- Preserve the room's basic structure
- Create photorealistic interior photography quality
- Ensure perfect perspective and spatial coherence
- Use appropriate lighting and shadows
- Generate in ultra-high-definition 8K quality
- Create realistic materials and textures

This must be a photorealistic interior design visualization, not an artistic interpretation.
((highly detailed)), ((ultra realistic)), ((photorealistic)), ((interior design)), ((professional photography))",
        main = profile.main,
        colors = profile.colors,
        materials = profile.materials,
        furniture = profile.furniture,
        lighting = profile.lighting,
        mood = profile.mood,
    );

    PromptPair {
        prompt,
        negative_prompt: STYLE_NEGATIVE_PROMPT.to_string(),
    }
}

/// Prompt for a masked edit; `instruction` should already be translated
pub fn region_prompt(instruction: &str) -> PromptPair {
    let prompt = format!(
        "Change ONLY the masked area to: {instruction}

The masked area should be completely transformed according to the prompt.
Keep everything else EXACTLY the same. Maintain the same perspective, lighting, and overall style.
Photorealistic, professional interior photography, detailed textures, natural lighting, 8K quality"
    );

    PromptPair {
        prompt,
        negative_prompt: REGION_NEGATIVE_PROMPT.to_string(),
    }
}

/// Prompt for a whole-image customization driven by a parsed change request
pub fn customize_prompt(request: &ChangeRequest) -> PromptPair {
    let prompt = format!(
        "THIS IS AN IMAGE-TO-IMAGE TASK.

SPECIFIC INSTRUCTION: {}

DO NOT change the room layout, perspective, or camera angle.
DO NOT add or remove furniture unless explicitly requested.
ONLY modify the exact elements mentioned in the instruction.

Photorealistic, professional interior photography, detailed textures, natural lighting",
        request.instruction()
    );

    PromptPair {
        prompt,
        negative_prompt: CUSTOMIZE_NEGATIVE_PROMPT.to_string(),
    }
}
