// src/app/event_handler.rs
//! ユーザー入力 (クリック) をコントローラーに振り分けるよ。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::app::controller::SolitaireController;
use crate::components::stack::StackType;

/// クリックされた場所を表すよ！描画側で座標から変換して渡してね。
///
/// JSON だと `"Stock"`, `"Waste"`, `{"Pile":3}`, `{"Foundation":0}` みたいな形になる。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Stock,
    Waste,
    Pile(u8),
    Foundation(u8),
}

impl ClickTarget {
    /// 番号が範囲内か。JS から来た値はこれでチェックしてから `handle_click` に渡す。
    pub fn is_valid(self) -> bool {
        match self {
            ClickTarget::Stock => StackType::Stock.is_valid(),
            ClickTarget::Waste => StackType::Waste.is_valid(),
            ClickTarget::Pile(index) => StackType::Tableau(index).is_valid(),
            ClickTarget::Foundation(index) => StackType::Foundation(index).is_valid(),
        }
    }
}

/// クリックを対応するハンドラに渡す。
pub fn handle_click(controller: &mut SolitaireController, target: ClickTarget) {
    debug!("Click: {:?}", target);
    match target {
        ClickTarget::Stock => {
            controller.stock_clicked();
        }
        ClickTarget::Waste => controller.waste_clicked(),
        ClickTarget::Pile(index) => controller.pile_clicked(index),
        ClickTarget::Foundation(index) => controller.foundation_clicked(index),
    }
}
