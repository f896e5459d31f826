// src/systems/deal_system.rs

use log::info;

use crate::components::stack::StackType;
use crate::config::rules::{DEALT_CARD_COUNT, TABLEAU_COUNT};
use crate::system::System;
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札から7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 山札の一番上から1枚ずつ取って、場札 0 に1枚、場札 1 に2枚、…、場札 6 に7枚積む。
    ///    (列ごとに埋めていくので、場札 0 が山札の一番上のカードになるよ)
    /// 2. 各列の一番上だけ表向きにする。
    /// 3. 残りの24枚は裏向きのまま山札に残る。
    ///
    /// 山札が28枚未満なのは呼び出し側のバグなので panic する。
    pub fn execute(&self, world: &mut World) {
        let stock_len = world.stock().len();
        assert!(
            stock_len >= DEALT_CARD_COUNT,
            "デッキにカードが足りません！(場札配置中) {}枚しかない",
            stock_len
        );

        info!("⏳ 場札 (Tableau) にカードを配置中...");
        for tableau_index in 0..TABLEAU_COUNT as u8 {
            // 各列に配置するカード枚数は (列番号 + 1) 枚。
            for _ in 0..=tableau_index {
                if let Some(card) = world.stack_mut(StackType::Stock).pop() {
                    world.stack_mut(StackType::Tableau(tableau_index)).push(card);
                }
            }
            // その列の一番上のカードだけ表向きにするよ！👀
            if let Some(top) = world.stack_mut(StackType::Tableau(tableau_index)).last_mut() {
                top.turn_up();
            }
        }
        info!(
            "✅ 場札への配置完了！ ({}枚配置、山札に{}枚)",
            DEALT_CARD_COUNT,
            world.stock().len()
        );
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, world: &mut World) {
        self.execute(world);
    }
}
