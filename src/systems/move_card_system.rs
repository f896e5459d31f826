// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::stack::StackType;
use crate::logic::rules::{self, is_move_valid};
use crate::world::World;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どこからどこへ動かすか」を受け取って、ルール上可能かチェックし、
/// 可能なら World の状態を更新するよ。どのメソッドも、ダメだったら何も変えずに false を返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// `from` の一番上のカード1枚を `to` に移す。
    ///
    /// 捨て札 → 場札/組札、場札 → 組札、組札 → 場札で使うよ。
    /// 移動元が空、移動元の一番上が裏向き、ルール違反のときは何もしない。
    pub fn move_top_card(&self, world: &mut World, from: StackType, to: StackType) -> bool {
        if from == to {
            return false;
        }
        let Some(card) = world.stack(from).last() else {
            debug!("MoveCardSystem: {:?} is empty, nothing to move.", from);
            return false;
        };
        if !card.is_face_up() {
            debug!("MoveCardSystem: top of {:?} is face down.", from);
            return false;
        }
        if !is_move_valid(world, card, to) {
            debug!("MoveCardSystem: {} from {:?} to {:?} rejected. 🙅‍♀️", card, from, to);
            return false;
        }

        if let Some(card) = world.stack_mut(from).pop() {
            info!("MoveCardSystem: {} {:?} -> {:?}", card, from, to);
            world.stack_mut(to).push(card);
        }
        true
    }

    /// 場札 `from_pile` の一番上にある表向きの束をまるごと場札 `to_pile` に移す。
    ///
    /// 判定するのは束の一番下 (一番奥の表向きカード) だけ。
    /// ダメなときは元の列には一切触らないので、途中までだけ移るってことはないよ。
    pub fn move_face_up_run(&self, world: &mut World, from_pile: u8, to_pile: u8) -> bool {
        let from = StackType::Tableau(from_pile);
        let to = StackType::Tableau(to_pile);
        if from_pile == to_pile {
            return false;
        }
        let Some(run_start) = rules::face_up_run_start(world.pile(from_pile)) else {
            debug!("MoveCardSystem: pile {} has no face-up run.", from_pile);
            return false;
        };

        let run_bottom = &world.pile(from_pile)[run_start];
        if !is_move_valid(world, run_bottom, to) {
            debug!(
                "MoveCardSystem: run starting at {} from pile {} to pile {} rejected.",
                run_bottom, from_pile, to_pile
            );
            return false;
        }

        let mut run = world.stack_mut(from).split_off(run_start);
        info!(
            "MoveCardSystem: moving {} card(s) from pile {} to pile {}",
            run.len(),
            from_pile,
            to_pile
        );
        world.stack_mut(to).append(&mut run);
        true
    }

    /// 場札の一番上が裏向きなら表にする。表にしたら true。
    pub fn reveal_pile_top(&self, world: &mut World, pile: u8) -> bool {
        match world.stack_mut(StackType::Tableau(pile)).last_mut() {
            Some(card) if !card.is_face_up() => {
                card.turn_up();
                info!("MoveCardSystem: revealed {} on pile {}", card, pile);
                true
            }
            _ => false,
        }
    }
}
