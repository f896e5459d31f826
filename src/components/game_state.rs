// src/components/game_state.rs

// serde を使う宣言！スナップショットで JS 側に渡すよ！
use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// 配り直した直後は Playing、4つの組札が全部 K で終わったら Won になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 勝利！🏆
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}
