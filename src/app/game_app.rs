// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::controller::SolitaireController;
use crate::app::event_handler::{self, ClickTarget};
use crate::app::state_getter;

/// JavaScript から使うゲーム本体だよ！🎮
///
/// 中身は `SolitaireController` をそのまま持ってるだけ。
/// JS から来た番号はここでチェックして、範囲外なら panic じゃなくてエラーを返す。
#[wasm_bindgen]
pub struct GameApp {
    controller: SolitaireController,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { controller: SolitaireController::new() }
    }

    /// シードを指定して配る。同じシードなら同じゲームになるよ。
    pub fn with_seed(seed: u64) -> Self {
        info!("GameApp: Initializing with seed {}...", seed);
        Self { controller: SolitaireController::with_seed(seed) }
    }

    /// 配り直し！
    pub fn new_game(&mut self) {
        info!("GameApp: new_game() called.");
        self.controller.new_game();
    }

    pub fn stock_clicked(&mut self) {
        self.controller.stock_clicked();
    }

    pub fn waste_clicked(&mut self) {
        self.controller.waste_clicked();
    }

    pub fn pile_clicked(&mut self, index: u8) -> Result<(), JsValue> {
        self.click(ClickTarget::Pile(index)).map_err(|e| JsValue::from_str(&e))
    }

    pub fn foundation_clicked(&mut self, index: u8) -> Result<(), JsValue> {
        self.click(ClickTarget::Foundation(index)).map_err(|e| JsValue::from_str(&e))
    }

    /// `{"Pile":3}` みたいな JSON でクリックを受け取る版。
    pub fn handle_click(&mut self, target_json: String) -> Result<(), JsValue> {
        self.click_json(&target_json).map_err(|e| JsValue::from_str(&e))
    }

    pub fn is_waste_selected(&self) -> bool {
        self.controller.is_waste_selected()
    }

    pub fn is_pile_selected(&self) -> bool {
        self.controller.is_pile_selected()
    }

    pub fn selected_pile_index(&self) -> Option<u8> {
        self.controller.selected_pile_index()
    }

    pub fn is_foundation_selected(&self) -> bool {
        self.controller.is_foundation_selected()
    }

    pub fn selected_foundation_index(&self) -> Option<u8> {
        self.controller.selected_foundation_index()
    }

    pub fn is_won(&self) -> bool {
        self.controller.status().is_won()
    }

    /// テーブル全体を JSON 文字列で返すよ。描画側はこれを読んで描き直す。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.controller).map_err(|e| JsValue::from_str(&e))
    }
}

// JS に公開しない内部ヘルパー。エラーは String で返して、境界で JsValue にする。
impl GameApp {
    pub fn controller(&self) -> &SolitaireController {
        &self.controller
    }

    fn click(&mut self, target: ClickTarget) -> Result<(), String> {
        if !target.is_valid() {
            let error_msg = format!("GameApp: invalid click target {:?}", target);
            error!("{}", error_msg);
            return Err(error_msg);
        }
        event_handler::handle_click(&mut self.controller, target);
        Ok(())
    }

    fn click_json(&mut self, target_json: &str) -> Result<(), String> {
        match serde_json::from_str::<ClickTarget>(target_json) {
            Ok(target) => self.click(target),
            Err(e) => {
                let error_msg = format!("Failed to deserialize click target: {}. JSON: {}", e, target_json);
                error!("{}", error_msg);
                Err(error_msg)
            }
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
