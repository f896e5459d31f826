// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// システムは、ゲームのロジックのうち「World 全体に1回かけるだけ」の処理をまとめたもの。
/// 配る、山札をめくる、勝利判定する…みたいな、引数なしで World を読み書きするやつ！
/// 移動元と移動先が必要なカード移動は `MoveCardSystem` の個別メソッドでやるよ。
pub trait System {
    /// このシステムを実行するよ！
    fn run(&mut self, world: &mut World);
}
