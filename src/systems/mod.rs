// src/systems/mod.rs
//! World を書き換えるシステムたち！配る、めくる、動かす、勝利判定。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::MoveCardSystem;
pub use stock_system::{draw_from_stock, StockAction};
pub use win_condition_system::WinConditionSystem;
