// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod logger;
pub mod logic;
pub mod protocol;
pub mod system;
pub mod systems;
pub mod world;

pub use app::{ClickTarget, GameApp, SolitaireController};
pub use components::{Card, CardColor, GameStatus, Rank, Selection, StackType, Suit};
pub use logic::deck::{create_shuffled_stock, create_shuffled_stock_with, create_standard_deck};
pub use world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook set! Logger ready.");
}

/// JS 側から冗長ログに切り替えたい時用。
#[wasm_bindgen]
pub fn set_log_level_debug(enabled: bool) {
    let level = if enabled { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    log::set_max_level(level);
}
