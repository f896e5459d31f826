// src/protocol.rs

// このファイルは、Rust (WASM) と描画側 (JavaScript) の間で
// やり取りするデータの形式を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;

/// カード1枚分の描画用データ。ランクは 1〜13 の数値で渡すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: u8,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit(),
            rank: card.rank().value(),
            is_face_up: card.is_face_up(),
        }
    }
}

/// テーブル全体のスナップショット。描画側はこれだけ見れば全部描けるはず！
/// どの列も「下 → 上」の順番だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub foundations: Vec<Vec<CardData>>,
    pub piles: Vec<Vec<CardData>>,
    pub selection: Selection,
    pub status: GameStatus,
}
