// src/systems/stock_system.rs
//! 山札 (Stock) のクリックに関するロジック (捨て札へめくる / 捨て札を山札に戻す)。

use log::info;

use crate::components::stack::StackType;
use crate::logic::rules::stock_waste;
use crate::world::World;

/// 山札をクリックした結果。ログと描画側への通知に使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// 山札から捨て札へ n 枚めくった
    Drew(usize),
    /// 捨て札の n 枚を山札に戻した
    Recycled(usize),
}

/// 山札をめくる。山札が空なら、代わりに捨て札を全部山札に戻すよ。
pub fn draw_from_stock(world: &mut World) -> StockAction {
    if stock_waste::can_deal_from_stock(world.stock().is_empty()) {
        StockAction::Drew(deal_from_stock(world))
    } else {
        StockAction::Recycled(reset_waste_to_stock(world))
    }
}

/// 山札の一番上から最大3枚を捨て札に移して表向きにする。
/// 最後にめくったカードが捨て札の一番上になるよ。移した枚数を返す。
pub fn deal_from_stock(world: &mut World) -> usize {
    let count = stock_waste::cards_to_draw(world.stock().len());
    for _ in 0..count {
        if let Some(mut card) = world.stack_mut(StackType::Stock).pop() {
            card.turn_up();
            info!("  Dealing card {} to Waste.", card);
            world.stack_mut(StackType::Waste).push(card);
        }
    }
    count
}

/// 捨て札を一番上から1枚ずつ山札に戻して裏向きにする。移した枚数を返す。
///
/// 一枚ずつ pop → push なので山札は捨て札の逆順になる。
/// つまり、次に山札をめくると前回と同じ順番でカードが出てくるよ。
pub fn reset_waste_to_stock(world: &mut World) -> usize {
    if !stock_waste::can_reset_stock_from_waste(world.stock().is_empty(), world.waste().is_empty()) {
        info!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return 0;
    }

    let mut moved = 0;
    while let Some(mut card) = world.stack_mut(StackType::Waste).pop() {
        card.turn_down();
        world.stack_mut(StackType::Stock).push(card);
        moved += 1;
    }
    info!("  Waste pile reset to Stock complete. ({} cards)", moved);
    moved
}
