// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::system::System;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4つの組札の一番上が全部 K なら Won、そうじゃなければ Playing に World の状態を合わせる。
/// 組札のカードが増えたり減ったりした直後に毎回呼ぶ想定だよ。
#[derive(Debug, Clone, Copy, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 勝利条件を見て状態を更新する。クリアしてたら true。
    ///
    /// 組札の K を場札に戻せばクリアは取り消しになるので、毎回組札から判定し直すよ。
    pub fn check(&self, world: &mut World) -> bool {
        let won = world.check_for_win();
        let status = if won { GameStatus::Won } else { GameStatus::Playing };
        if status != world.status() {
            if won {
                info!("WinConditionSystem: Congratulations! You win! 🏆");
            } else {
                info!("WinConditionSystem: a King left the foundations, back to Playing.");
            }
            world.set_status(status);
        }
        won
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        self.check(world);
    }
}
