// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod controller;
pub mod event_handler;
pub mod game_app;
pub mod state_getter;

pub use controller::SolitaireController;
pub use event_handler::ClickTarget;
pub use game_app::GameApp;
