// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dictionary substitution of Japanese room vocabulary into English
//!
//! Only the listed terms are replaced; anything else passes through untouched.

use tracing::info;

/// Replacement table, applied in order.
///
/// A term must come before any shorter term it contains (本棚 before 棚).
pub const ROOM_TERMS: &[(&str, &str)] = &[
    ("天井", "ceiling"),
    ("壁", "wall"),
    ("床", "floor"),
    ("窓", "window"),
    ("ドア", "door"),
    ("家具", "furniture"),
    ("ソファ", "sofa"),
    ("テーブル", "table"),
    ("椅子", "chair"),
    ("ベッド", "bed"),
    ("照明", "lighting"),
    ("ランプ", "lamp"),
    ("カーテン", "curtain"),
    ("カーペット", "carpet"),
    ("ラグジュアリー", "luxury"),
    ("ラグ", "rug"),
    ("本棚", "bookshelf"),
    ("棚", "shelf"),
    ("キッチン", "kitchen"),
    ("バスルーム", "bathroom"),
    ("リビング", "living room"),
    ("ダイニング", "dining room"),
    ("寝室", "bedroom"),
    ("オフィス", "office"),
    ("モダン", "modern"),
    ("ミニマル", "minimal"),
    ("北欧", "scandinavian"),
    ("インダストリアル", "industrial"),
    ("伝統的", "traditional"),
    ("居心地の良い", "cozy"),
    ("ナチュラル", "natural"),
    ("青", "blue"),
    ("赤", "red"),
    ("緑", "green"),
    ("黄色", "yellow"),
    ("白", "white"),
    ("黒", "black"),
    ("グレー", "gray"),
    ("茶色", "brown"),
    ("木製", "wooden"),
    ("金属", "metal"),
    ("ガラス", "glass"),
    ("大理石", "marble"),
    ("コンクリート", "concrete"),
    ("レンガ", "brick"),
    ("に変更", "change to"),
    ("にする", "make it"),
];

/// Replace every known Japanese term in `text` with its English equivalent
pub fn translate_room_terms(text: &str) -> String {
    let translated = ROOM_TERMS
        .iter()
        .fold(text.to_string(), |acc, (ja, en)| acc.replace(ja, en));

    info!("Translated prompt: '{}' -> '{}'", text, translated);
    translated
}

/// Like [`translate_room_terms`], but each substitution is padded with spaces
/// so English words never run into neighbouring text.
pub fn translate_room_words(text: &str) -> String {
    ROOM_TERMS.iter().fold(text.to_string(), |acc, (ja, en)| {
        acc.replace(ja, &format!(" {} ", en))
    })
}
