// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Interior style catalogue

use serde::{Deserialize, Serialize};

/// Style used when a request names an unknown style id
pub const DEFAULT_STYLE_ID: &str = "simple";

/// Descriptive phrases for one interior aesthetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub id: &'static str,
    /// Display name shown in the style picker
    pub name: &'static str,
    pub main: &'static str,
    pub colors: &'static str,
    pub materials: &'static str,
    pub furniture: &'static str,
    pub lighting: &'static str,
    pub mood: &'static str,
}

/// Entry returned by `GET /api/room-styles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSummary {
    pub id: String,
    pub name: String,
    pub image: String,
}

pub const STYLE_PROFILES: &[StyleProfile] = &[
    StyleProfile {
        id: "simple",
        name: "シンプル",
        main: "modern minimalist interior style, uncluttered and streamlined design",
        colors: "bright white walls, subtle gray touches, neutral monochrome palette",
        materials: "sleek surfaces, pale wood finishes, matte textures",
        furniture: "essential furniture only, straight lines, multifunctional design",
        lighting: "minimalist pendant lights, large windows, natural daylight",
        mood: "peaceful, orderly, refreshing minimal space",
    },
    StyleProfile {
        id: "scandinavian",
        name: "北欧風",
        main: "nordic-inspired scandinavian interior, inviting and balanced",
        colors: "crisp white walls, blonde wood, soft grays, gentle pastels",
        materials: "oak flooring, cozy textiles, painted wood finishes",
        furniture: "light wood furniture, soft fabrics, playful modern shapes",
        lighting: "ample daylight, contemporary pendants, warm soft glow",
        mood: "bright, tranquil, welcoming nordic comfort",
    },
    StyleProfile {
        id: "hotel",
        name: "ホテルライク",
        main: "hotel-inspired modern interior, elegant and comfort-focused design",
        colors: "neutral tones like beige, white, and taupe, with soft accent colors",
        materials: "high-quality fabrics, polished wood, glass, and metal finishes",
        furniture: "coordinated furniture sets, upholstered headboard, sleek desk and armchair",
        lighting: "layered lighting with warm tones, bedside lamps, sconces, and natural light",
        mood: "calm, luxurious, welcoming, like a premium hotel suite",
    },
    StyleProfile {
        id: "korean",
        name: "韓国風",
        main: "contemporary korean interior, sleek and modern asian design",
        colors: "creamy whites, muted grays, earthy accents, dark contrasts",
        materials: "light-toned woods, textured wall panels, smooth stone",
        furniture: "low minimalist furniture, streamlined storage, built-ins",
        lighting: "subtle ceiling lights, soft indirect glow",
        mood: "fashionable, serene, understated korean refinement",
    },
    StyleProfile {
        id: "brooklyn",
        name: "ブルックリンスタイル",
        main: "industrial brooklyn loft, urban apartment conversion",
        colors: "weathered brick red, concrete gray, black metal details",
        materials: "exposed brick, steel pipes, reclaimed wood surfaces",
        furniture: "industrial style pieces, vintage decor, worn-in leather",
        lighting: "caged pendant lights, exposed bulbs, utilitarian fixtures",
        mood: "gritty, urban, creative industrial vibe",
    },
    StyleProfile {
        id: "natural",
        name: "ナチュラル",
        main: "nature-inspired organic interior, biophilic oasis",
        colors: "earthy tans, leafy greens, soft wood tones",
        materials: "raw wood, natural stone, woven textiles, living plants",
        furniture: "nature-shaped wood furniture, handwoven fabrics, eco-focused pieces",
        lighting: "floor-to-ceiling windows, sunlit interiors, warm spot lighting",
        mood: "calm, earthy, deeply connected to the natural world",
    },
    StyleProfile {
        id: "japanese_modern",
        name: "和モダン",
        main: "contemporary japanese zen interior, modern simplicity",
        colors: "gentle whites, honey wood grains, charcoal highlights",
        materials: "shoji screens, tatami flooring, authentic woodwork",
        furniture: "low tables, minimalist built-ins, hidden storage",
        lighting: "lantern-style lamps, subtle indirect light, soft daylight",
        mood: "contemplative, balanced, serene japanese minimalism",
    },
    StyleProfile {
        id: "ethnic_mix",
        name: "エスニックミックス",
        main: "eclectic world-inspired ethnic fusion interiors",
        colors: "vivid jewel colors, spicy warm hues, natural earthy tones",
        materials: "handcrafted textiles, ornate wood carvings, organic fibers",
        furniture: "global mix of artisanal furniture, one-of-a-kind objects",
        lighting: "ethnic pendant lanterns, soft colored lamps, glowing atmosphere",
        mood: "adventurous, multicultural, artistically rich",
    },
];

/// Exact lookup by style id
pub fn find_style(id: &str) -> Option<&'static StyleProfile> {
    STYLE_PROFILES.iter().find(|profile| profile.id == id)
}

/// Lookup that falls back to the default profile for unknown ids
pub fn resolve_style(id: &str) -> &'static StyleProfile {
    find_style(id).unwrap_or(&STYLE_PROFILES[0])
}

impl StyleProfile {
    /// Path of the preview image served from the public directory
    pub fn preview_path(&self) -> String {
        format!("/images/styles/{}.jpg", self.id)
    }

    pub fn summary(&self) -> StyleSummary {
        StyleSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            image: self.preview_path(),
        }
    }
}

pub fn style_summaries() -> Vec<StyleSummary> {
    STYLE_PROFILES.iter().map(StyleProfile::summary).collect()
}
