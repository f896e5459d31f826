//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// スタック (一番上が末尾) の一番上のカードを返すよ。空なら None。
pub fn top_card(stack: &[Card]) -> Option<&Card> {
    stack.last()
}

/// 場札の一番上にある「表向きの連続した束」が、何枚目から始まるかを返すよ。
///
/// 束がない (列が空、または一番上が裏向き) なら None。
/// 例: [裏, 裏, 表, 表] なら Some(2)。
pub fn face_up_run_start(pile: &[Card]) -> Option<usize> {
    let face_up = pile.iter().rev().take_while(|card| card.is_face_up()).count();
    if face_up == 0 {
        None
    } else {
        Some(pile.len() - face_up)
    }
}
