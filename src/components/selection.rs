// src/components/selection.rs

use serde::{Deserialize, Serialize};

/// いま選択されているゾーンを表す Enum だよ。👆
///
/// 2回クリックで1手になる操作（移動元を選ぶ → 移動先を選ぶ）の、
/// 1回目のクリックの結果をここに覚えておくんだ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// 何も選ばれてない
    #[default]
    None,
    /// 捨て札 (Waste) の一番上
    Waste,
    /// 場札の列 (0-6) の表向きの束
    Pile(u8),
    /// 組札 (0-3) の一番上
    Foundation(u8),
}

impl Selection {
    pub fn is_none(self) -> bool {
        self == Selection::None
    }

    pub fn is_waste_selected(self) -> bool {
        self == Selection::Waste
    }

    pub fn is_pile_selected(self) -> bool {
        matches!(self, Selection::Pile(_))
    }

    /// 選ばれてる場札の番号。場札じゃなければ None。
    pub fn selected_pile_index(self) -> Option<u8> {
        match self {
            Selection::Pile(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_foundation_selected(self) -> bool {
        matches!(self, Selection::Foundation(_))
    }

    /// 選ばれてる組札の番号。組札じゃなければ None。
    pub fn selected_foundation_index(self) -> Option<u8> {
        match self {
            Selection::Foundation(index) => Some(index),
            _ => None,
        }
    }
}
