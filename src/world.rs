// src/world.rs

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::stack::StackType;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::rules;

/// World（ワールド）は、テーブルの上の全部のカードを持ってる中心的な存在だよ！🌍
///
/// 山札、捨て札、4つの組札、7つの場札。どれも「末尾が一番上」の Vec で、
/// カードはこの中のどこか1か所にだけ存在する。移動は pop して push するだけなので、
/// 増えたり消えたりしない (52枚のまま！)。
///
/// 番号付きのスタックに範囲外の番号を渡すのは呼び出し側のバグなので、panic するよ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    piles: [Vec<Card>; TABLEAU_COUNT],
    status: GameStatus,
}

impl World {
    /// 空っぽのテーブルを作る。
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した山札だけが置かれたテーブルを作る。配るのは `DealInitialCardsSystem` の仕事！
    pub fn with_stock(stock: Vec<Card>) -> Self {
        Self { stock, ..Self::default() }
    }

    // --- 読み取り ---

    /// 指定したスタックのカード列 (下 → 上)。
    pub fn stack(&self, stack_type: StackType) -> &[Card] {
        assert_valid(stack_type);
        match stack_type {
            StackType::Stock => &self.stock,
            StackType::Waste => &self.waste,
            StackType::Foundation(index) => &self.foundations[index as usize],
            StackType::Tableau(index) => &self.piles[index as usize],
        }
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundation(&self, index: u8) -> &[Card] {
        self.stack(StackType::Foundation(index))
    }

    pub fn foundations(&self) -> &[Vec<Card>] {
        &self.foundations
    }

    /// 場札の列 (下 → 上)。描画側はこれをそのまま並べればOK！
    pub fn pile(&self, index: u8) -> &[Card] {
        self.stack(StackType::Tableau(index))
    }

    pub fn top_of_stock(&self) -> Option<&Card> {
        rules::top_card(&self.stock)
    }

    pub fn top_of_waste(&self) -> Option<&Card> {
        rules::top_card(&self.waste)
    }

    pub fn foundation_top(&self, index: u8) -> Option<&Card> {
        rules::top_card(self.foundation(index))
    }

    pub fn pile_top(&self, index: u8) -> Option<&Card> {
        rules::top_card(self.pile(index))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// テーブル上の全カードを順番に回すイテレータ。保存則のチェック用。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        StackType::all().flat_map(move |stack_type| self.stack(stack_type).iter())
    }

    pub fn total_card_count(&self) -> usize {
        StackType::all().map(|stack_type| self.stack(stack_type).len()).sum()
    }

    // --- ルール問い合わせ (読むだけ) ---

    /// `card` を場札 `pile_index` に置けるか。
    pub fn can_add_to_tableau(&self, card: &Card, pile_index: u8) -> bool {
        rules::can_add_to_tableau(card, self.pile(pile_index))
    }

    /// `card` を組札 `foundation_index` に置けるか。
    pub fn can_add_to_foundation(&self, card: &Card, foundation_index: u8) -> bool {
        rules::can_add_to_foundation(card, self.foundation(foundation_index))
    }

    /// 4つの組札の一番上が全部 K か。
    pub fn check_for_win(&self) -> bool {
        rules::check_win_condition(&self.foundations)
    }

    // --- 書き込み (systems からだけ使う) ---

    pub(crate) fn stack_mut(&mut self, stack_type: StackType) -> &mut Vec<Card> {
        assert_valid(stack_type);
        match stack_type {
            StackType::Stock => &mut self.stock,
            StackType::Waste => &mut self.waste,
            StackType::Foundation(index) => &mut self.foundations[index as usize],
            StackType::Tableau(index) => &mut self.piles[index as usize],
        }
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

fn assert_valid(stack_type: StackType) {
    assert!(stack_type.is_valid(), "スタック番号が範囲外です: {:?}", stack_type);
}
