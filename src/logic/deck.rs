// src/logic/deck.rs

use itertools::iproduct;
use rand::{thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 並び順は A♣ A♦ A♥ A♠ 2♣ ... K♠ (ランクごとに ♣ ♦ ♥ ♠)。
/// 生成された時点では、すべてのカードは裏向きになってる！
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_RANKS, ALL_SUITS)
        .map(|(rank, suit)| Card::new(suit, rank))
        .collect()
}

/// シャッフル済みの山札を作るよ。乱数生成器は呼び出し側から渡す！🎲
///
/// 残りのカードからランダムに1枚抜いて山札に積む、を空になるまで繰り返す。
/// 毎回「残り全部」から等確率で選ぶので、どの並びも同じ確率で出てくるよ。
/// 山札の一番上は Vec の末尾。
pub fn create_shuffled_stock_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut remaining = create_standard_deck();
    let mut stock = Vec::with_capacity(DECK_SIZE);
    while !remaining.is_empty() {
        let index = rng.gen_range(0..remaining.len());
        // swap_remove で残りの順番は崩れるけど、次も全体から等確率で選ぶから問題なし
        stock.push(remaining.swap_remove(index));
    }
    stock
}

/// `thread_rng` でシャッフルした山札を作る。
pub fn create_shuffled_stock() -> Vec<Card> {
    create_shuffled_stock_with(&mut thread_rng())
}
