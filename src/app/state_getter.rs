//! コントローラーの状態をスナップショットにして、JSON に変換する。

use log::{debug, error};

use crate::app::controller::SolitaireController;
use crate::components::card::Card;
use crate::config::rules::TABLEAU_COUNT;
use crate::protocol::{CardData, GameStateData};

fn to_card_data<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<CardData> {
    cards.into_iter().map(CardData::from).collect()
}

/// 今のテーブルとクリック選択状態をまるごと写し取るよ。
pub fn snapshot(controller: &SolitaireController) -> GameStateData {
    let world = controller.world();
    GameStateData {
        stock: to_card_data(world.stock()),
        waste: to_card_data(world.waste()),
        foundations: world.foundations().iter().map(|f| to_card_data(f)).collect(),
        piles: (0..TABLEAU_COUNT as u8)
            .map(|i| to_card_data(world.pile(i)))
            .collect(),
        selection: controller.selection(),
        status: controller.status(),
    }
}

/// スナップショットを JSON 文字列にする。失敗したらエラーメッセージを返すよ。
pub fn get_state_json(controller: &SolitaireController) -> Result<String, String> {
    let data = snapshot(controller);
    match serde_json::to_string(&data) {
        Ok(json_string) => {
            debug!("Successfully serialized game state to JSON.");
            Ok(json_string)
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            Err(error_msg)
        }
    }
}
