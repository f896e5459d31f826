// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここにある関数はどれも読むだけで、カードを動かしたりはしない。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
