// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Heuristic parsing of free-text customization requests

use super::translate::translate_room_words;

/// Instruction used when nothing recognisable was requested
pub const GENERIC_INSTRUCTION: &str =
    "Make the room look better while keeping the same layout and furniture.";

/// Part of the room a request can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPart {
    Floor,
    Wall,
    Ceiling,
    Furniture,
    Curtains,
    Lighting,
}

/// Match order matters: the first part with a keyword hit wins.
///
/// ASCII keywords match whole words; Japanese ones match anywhere.
const PART_KEYWORDS: &[(RoomPart, &[&str])] = &[
    (RoomPart::Floor, &["floor", "floors", "flooring", "フローリング"]),
    (RoomPart::Wall, &["wall", "walls", "クロス"]),
    (RoomPart::Ceiling, &["ceiling", "ceilings"]),
    (
        RoomPart::Furniture,
        &[
            "furniture", "sofa", "sofas", "table", "tables", "chair", "chairs", "bed", "beds",
        ],
    ),
    (RoomPart::Curtains, &["curtain", "curtains"]),
    (RoomPart::Lighting, &["lighting", "lamp", "lamps"]),
];

/// Longer names first so "light gray" is not reported as plain "gray"
const COLOR_KEYWORDS: &[&str] = &[
    "light gray",
    "dark gray",
    "navy",
    "beige",
    "cream",
    "white",
    "black",
    "gray",
    "grey",
    "blue",
    "green",
    "yellow",
    "brown",
    "pink",
    "purple",
    "orange",
    "red",
    "wooden",
    "marble",
    "concrete",
    "brick",
];

impl RoomPart {
    /// Noun used in generated instructions
    pub fn noun(&self) -> &'static str {
        match self {
            RoomPart::Floor => "floor",
            RoomPart::Wall => "walls",
            RoomPart::Ceiling => "ceiling",
            RoomPart::Furniture => "furniture",
            RoomPart::Curtains => "curtains",
            RoomPart::Lighting => "lighting",
        }
    }
}

/// What the user asked to change; either half may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRequest {
    pub part: Option<RoomPart>,
    pub color: Option<String>,
}

impl ChangeRequest {
    /// Parse a free-text request, Japanese or English
    pub fn parse(text: &str) -> Self {
        let normalized = translate_room_words(text).to_lowercase();
        let words: Vec<&str> = normalized
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let part = PART_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|k| contains_keyword(&normalized, &words, k))
            })
            .map(|(part, _)| *part);

        let color = COLOR_KEYWORDS
            .iter()
            .find(|color| contains_keyword(&normalized, &words, color))
            .map(|color| color.to_string());

        Self { part, color }
    }

    /// Turn the request into one canned, narrowly scoped instruction
    pub fn instruction(&self) -> String {
        match (self.part, self.color.as_deref()) {
            (Some(RoomPart::Lighting), Some(color)) => format!(
                "Change ONLY the lighting to {color} tone. The lighting should be {color}. Keep everything else exactly the same."
            ),
            (Some(part), Some(color)) => {
                let noun = part.noun();
                format!(
                    "Change ONLY the {noun} to {color} color. The {noun} should be {color}. Keep everything else exactly the same."
                )
            }
            (Some(part), None) => format!(
                "Change ONLY the {}. Keep everything else exactly the same.",
                part.noun()
            ),
            (None, Some(color)) => format!(
                "Change the color scheme to {color}. The room should have {color} tones."
            ),
            (None, None) => GENERIC_INSTRUCTION.to_string(),
        }
    }
}

/// Whole-word (or word-sequence) match for ASCII keywords, substring otherwise
fn contains_keyword(text: &str, words: &[&str], keyword: &str) -> bool {
    if !keyword.is_ascii() {
        return text.contains(keyword);
    }
    let keyword: Vec<&str> = keyword.split(' ').collect();
    words.windows(keyword.len()).any(|w| w == keyword.as_slice())
}
