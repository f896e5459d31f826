//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::top_card;
use crate::components::card::{Card, Rank};

/// 指定されたカードが、組札 (`foundation`) の一番上に置けるかチェックする。
///
/// - 組札が空なら A だけ置ける。
/// - 空じゃなければ、一番上と**同じ色**で、ランクがちょうど1つ上のカードだけ。
///
/// スートじゃなくて色で比べてる！❤️ の上に ♦️ の 2 も置ける。
/// 普通のクロンダイクとは違うけど、このゲームのルールとしてそのまま守るよ。
pub fn can_add_to_foundation(card: &Card, foundation: &[Card]) -> bool {
    let result = match top_card(foundation) {
        None => card.rank() == Rank::Ace,
        Some(top) => {
            card.color() == top.color() && card.rank().value() == top.rank().value() + 1
        }
    };
    debug!(
        "[Foundation Rule] {} onto {:?} -> {}",
        card,
        top_card(foundation).map(ToString::to_string),
        result
    );
    result
}
