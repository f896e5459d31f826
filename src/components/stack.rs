// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Deserialize, Serialize};

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが置かれる場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。4つあって、番号 (0-3) で管理する。
    /// スートは固定じゃないよ！最初に置いた A で決まるわけでもない。
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

impl StackType {
    /// 番号付きのスタックの番号が範囲内かチェックするよ。Stock と Waste はいつでもOK。
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Tableau(index) => (index as usize) < TABLEAU_COUNT,
            StackType::Foundation(index) => (index as usize) < FOUNDATION_COUNT,
            StackType::Stock | StackType::Waste => true,
        }
    }

    /// 全部のスタックを列挙する。カード保存則のチェックとかスナップショットで使う。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
    }
}
