// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::world::World;

/// `card` を `target_stack` の一番上に置けるか検証する。
/// 移動先の種類に応じて、場札か組札のルールに振り分けるよ。
pub fn is_move_valid(world: &World, card: &Card, target_stack: StackType) -> bool {
    match target_stack {
        StackType::Tableau(target_index) => world.can_add_to_tableau(card, target_index),
        StackType::Foundation(target_index) => world.can_add_to_foundation(card, target_index),
        StackType::Stock | StackType::Waste => {
            // Stock, Waste への直接移動は許可されない
            debug!("[Rules Validation] Moving to {:?} is not allowed.", target_stack);
            false
        }
    }
}
