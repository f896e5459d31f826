//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::top_card;
use crate::components::card::{Card, Rank};

/// 指定されたカードが、場札の列 (`pile`) の一番上に置けるかチェックする。
///
/// - 列が空なら K だけ置ける。
/// - 空じゃなければ、一番上が表向きで、色違いで、ランクがちょうど1つ下のカードだけ。
pub fn can_add_to_tableau(card: &Card, pile: &[Card]) -> bool {
    match top_card(pile) {
        None => {
            let is_king = card.rank() == Rank::King;
            debug!("    [Rule Check] Moving {} onto empty Tableau. Is King: {}.", card, is_king);
            is_king
        }
        Some(top) => {
            let colors_different = card.color() != top.color();
            let rank_is_one_less = card.rank().value() + 1 == top.rank().value();
            debug!(
                "    [Rule Check] Moving {} onto {} (face up: {}). Colors different: {}. Rank is one less: {}.",
                card,
                top,
                top.is_face_up(),
                colors_different,
                rank_is_one_less
            );
            top.is_face_up() && colors_different && rank_is_one_less
        }
    }
}
