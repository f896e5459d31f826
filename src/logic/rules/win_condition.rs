//! ゲームの勝利条件判定ロジックを定義するよ。

use super::common::top_card;
use crate::components::card::{Card, Rank};

/// 4つの組札すべてが空じゃなくて、一番上が K ならクリア！🏆
pub fn check_win_condition(foundations: &[Vec<Card>]) -> bool {
    !foundations.is_empty()
        && foundations
            .iter()
            .all(|foundation| top_card(foundation).map_or(false, |top| top.rank() == Rank::King))
}
