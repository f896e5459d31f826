// src/app/controller.rs
//! クリック操作 (1回目で選ぶ → 2回目で動かす) を World に橋渡しするコントローラー。

use log::debug;
use rand::{thread_rng, Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;
use crate::components::stack::StackType;
use crate::logic::deck::create_shuffled_stock_with;
use crate::system::System;
use crate::systems::{draw_from_stock, DealInitialCardsSystem, MoveCardSystem, StockAction, WinConditionSystem};
use crate::world::World;

/// ソリティア1ゲーム分の状態と、選択状態をまとめて持つコントローラーだよ！🎮
///
/// 描画側はクリックを `stock_clicked` / `waste_clicked` / `pile_clicked` /
/// `foundation_clicked` のどれかに変換して呼ぶだけ。
/// ルール違反のクリックはエラーじゃなくて「何も起きない」になる。
/// 範囲外の番号は呼び出し側のバグなので panic するよ。
#[derive(Debug, Clone)]
pub struct SolitaireController {
    world: World,
    selection: Selection,
    mover: MoveCardSystem,
    win_condition: WinConditionSystem,
}

impl Default for SolitaireController {
    fn default() -> Self {
        Self::new()
    }
}

impl SolitaireController {
    /// `thread_rng` でシャッフルして配ったゲームを始める。
    pub fn new() -> Self {
        Self::from_rng(&mut thread_rng())
    }

    /// シードから配る。同じシードなら同じ配りになるよ。
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut controller = Self::from_world(World::new());
        controller.new_game_with(rng);
        controller
    }

    /// 用意済みの World からそのまま始める (配りもシャッフルもしない)。
    pub fn from_world(world: World) -> Self {
        Self {
            world,
            selection: Selection::None,
            mover: MoveCardSystem::new(),
            win_condition: WinConditionSystem::new(),
        }
    }

    /// テーブルを片付けて、新しくシャッフルした山札から配り直す。
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut world = World::with_stock(create_shuffled_stock_with(rng));
        DealInitialCardsSystem.run(&mut world);
        self.world = world;
        self.selection = Selection::None;
        debug!("SolitaireController: new game dealt.");
    }

    pub fn new_game(&mut self) {
        self.new_game_with(&mut thread_rng());
    }

    // --- 読み取り (描画側向け) ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn top_of_stock(&self) -> Option<&Card> {
        self.world.top_of_stock()
    }

    pub fn top_of_waste(&self) -> Option<&Card> {
        self.world.top_of_waste()
    }

    pub fn foundation_top(&self, index: u8) -> Option<&Card> {
        self.world.foundation_top(index)
    }

    pub fn pile(&self, index: u8) -> &[Card] {
        self.world.pile(index)
    }

    pub fn status(&self) -> GameStatus {
        self.world.status()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_waste_selected(&self) -> bool {
        self.selection.is_waste_selected()
    }

    pub fn is_pile_selected(&self) -> bool {
        self.selection.is_pile_selected()
    }

    pub fn selected_pile_index(&self) -> Option<u8> {
        self.selection.selected_pile_index()
    }

    pub fn is_foundation_selected(&self) -> bool {
        self.selection.is_foundation_selected()
    }

    pub fn selected_foundation_index(&self) -> Option<u8> {
        self.selection.selected_foundation_index()
    }

    // --- クリック ---

    /// 山札クリック。何も選択してない時だけ、めくる (空なら捨て札を戻す)。
    pub fn stock_clicked(&mut self) -> Option<StockAction> {
        if !self.selection.is_none() {
            debug!("Stock clicked while {:?} is selected, ignored.", self.selection);
            return None;
        }
        Some(draw_from_stock(&mut self.world))
    }

    /// 捨て札クリック。何も選択してなければ捨て札を選ぶ、捨て札を選択中なら解除。
    pub fn waste_clicked(&mut self) {
        match self.selection {
            Selection::None if !self.world.waste().is_empty() => self.select(Selection::Waste),
            Selection::Waste => self.clear_selection(),
            _ => {}
        }
    }

    /// 場札 `index` (0-6) クリック。
    pub fn pile_clicked(&mut self, index: u8) {
        let target = StackType::Tableau(index);
        assert_valid(target);

        match self.selection {
            Selection::None => match self.world.pile_top(index).map(Card::is_face_up) {
                Some(true) => self.select(Selection::Pile(index)),
                Some(false) => {
                    self.mover.reveal_pile_top(&mut self.world, index);
                }
                None => {}
            },
            Selection::Pile(selected) if selected == index => self.clear_selection(),
            Selection::Waste => {
                if self.mover.move_top_card(&mut self.world, StackType::Waste, target) {
                    self.clear_selection();
                }
            }
            Selection::Pile(selected) => {
                // ダメなら束は元の列のままで、選択も残る
                if self.mover.move_face_up_run(&mut self.world, selected, index) {
                    self.clear_selection();
                }
            }
            Selection::Foundation(selected) => {
                if self.mover.move_top_card(&mut self.world, StackType::Foundation(selected), target) {
                    self.clear_selection();
                    // 組札から K を戻したらクリアは取り消し
                    self.win_condition.check(&mut self.world);
                }
            }
        }
    }

    /// 組札 `index` (0-3) クリック。
    pub fn foundation_clicked(&mut self, index: u8) {
        let target = StackType::Foundation(index);
        assert_valid(target);

        match self.selection {
            Selection::Foundation(selected) if selected == index => self.clear_selection(),
            Selection::Waste => {
                if self.mover.move_top_card(&mut self.world, StackType::Waste, target) {
                    self.clear_selection();
                    self.win_condition.check(&mut self.world);
                }
            }
            Selection::Pile(selected) => {
                if self.mover.move_top_card(&mut self.world, StackType::Tableau(selected), target) {
                    self.clear_selection();
                    self.win_condition.check(&mut self.world);
                }
            }
            // 何も選んでない、または別の組札を選んでる時は、この組札を選び直す
            Selection::None | Selection::Foundation(_) => {
                if !self.world.foundation(index).is_empty() {
                    self.select(Selection::Foundation(index));
                }
            }
        }
    }

    /// 4つの組札の一番上が全部 K か。
    pub fn check_for_win(&self) -> bool {
        self.world.check_for_win()
    }

    fn select(&mut self, selection: Selection) {
        debug!("Selected {:?}", selection);
        self.selection = selection;
    }

    fn clear_selection(&mut self) {
        debug!("Selection cleared (was {:?})", self.selection);
        self.selection = Selection::None;
    }
}

fn assert_valid(stack_type: StackType) {
    assert!(stack_type.is_valid(), "クリックされた番号が範囲外です: {:?}", stack_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::config::rules::{DECK_SIZE, STOCK_AFTER_DEAL, TABLEAU_COUNT};
    use crate::logic::deck::create_standard_deck;

    fn face_up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.turn_up();
        card
    }

    fn controller_with(setup: impl FnOnce(&mut World)) -> SolitaireController {
        let mut world = World::new();
        setup(&mut world);
        SolitaireController::from_world(world)
    }

    #[test]
    fn new_game_is_dealt() {
        let controller = SolitaireController::with_seed(99);
        assert_eq!(controller.world().total_card_count(), DECK_SIZE);
        assert_eq!(controller.world().stock().len(), STOCK_AFTER_DEAL);
        for i in 0..TABLEAU_COUNT as u8 {
            assert_eq!(controller.pile(i).len(), i as usize + 1);
        }
        assert_eq!(controller.selection(), Selection::None);
        assert_eq!(controller.status(), GameStatus::Playing);
    }

    #[test]
    fn same_seed_same_deal() {
        let a = SolitaireController::with_seed(5);
        let b = SolitaireController::with_seed(5);
        assert_eq!(a.world(), b.world());
    }

    #[test]
    fn new_game_resets_selection_and_table() {
        let mut controller = SolitaireController::with_seed(3);
        controller.stock_clicked();
        controller.waste_clicked();
        assert!(controller.is_waste_selected());

        controller.new_game_with(&mut StdRng::seed_from_u64(4));
        assert_eq!(controller.selection(), Selection::None);
        assert!(controller.world().waste().is_empty());
        assert_eq!(controller.world().total_card_count(), DECK_SIZE);
    }

    #[test]
    fn stock_click_is_ignored_while_something_is_selected() {
        let mut controller = SolitaireController::with_seed(11);
        assert_eq!(controller.stock_clicked(), Some(StockAction::Drew(3)));
        controller.waste_clicked();
        assert!(controller.is_waste_selected());

        let before = controller.world().clone();
        assert_eq!(controller.stock_clicked(), None);
        assert_eq!(controller.world(), &before);
    }

    #[test]
    fn waste_click_toggles_selection() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Waste).push(face_up(Suit::Heart, Rank::Four));
        });
        controller.waste_clicked();
        assert!(controller.is_waste_selected());
        controller.waste_clicked();
        assert_eq!(controller.selection(), Selection::None);
    }

    #[test]
    fn empty_waste_cannot_be_selected() {
        let mut controller = controller_with(|_| {});
        controller.waste_clicked();
        assert_eq!(controller.selection(), Selection::None);
    }

    #[test]
    fn pile_click_reveals_then_selects_then_clears() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Tableau(2)).push(Card::new(Suit::Club, Rank::Nine));
        });

        controller.pile_clicked(2);
        assert!(controller.pile(2)[0].is_face_up(), "裏向きならまず表にする");
        assert_eq!(controller.selection(), Selection::None, "表にしただけでは選択しない");

        controller.pile_clicked(2);
        assert_eq!(controller.selected_pile_index(), Some(2));

        controller.pile_clicked(2);
        assert_eq!(controller.selection(), Selection::None);

        // 空の列は何も起きない
        controller.pile_clicked(0);
        assert_eq!(controller.selection(), Selection::None);
    }

    #[test]
    fn waste_to_pile_move_clears_selection() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Tableau(1)).push(face_up(Suit::Club, Rank::Nine));
            world.stack_mut(StackType::Waste).push(face_up(Suit::Diamond, Rank::Eight));
        });
        controller.waste_clicked();
        controller.pile_clicked(1);

        assert_eq!(controller.selection(), Selection::None);
        assert!(controller.world().waste().is_empty());
        assert_eq!(controller.pile(1).len(), 2);
    }

    #[test]
    fn illegal_waste_to_pile_keeps_selection() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Tableau(1)).push(face_up(Suit::Club, Rank::Nine));
            world.stack_mut(StackType::Waste).push(face_up(Suit::Spade, Rank::Eight));
        });
        controller.waste_clicked();
        controller.pile_clicked(1);

        assert!(controller.is_waste_selected());
        assert_eq!(controller.world().waste().len(), 1);
        assert_eq!(controller.pile(1).len(), 1);
    }

    #[test]
    fn run_move_between_piles() {
        let mut controller = controller_with(|world| {
            let from = world.stack_mut(StackType::Tableau(0));
            from.push(Card::new(Suit::Heart, Rank::Two));
            from.push(face_up(Suit::Diamond, Rank::Nine));
            from.push(face_up(Suit::Spade, Rank::Eight));
            world.stack_mut(StackType::Tableau(3)).push(face_up(Suit::Club, Rank::Ten));
        });

        controller.pile_clicked(0);
        controller.pile_clicked(3);

        assert_eq!(controller.selection(), Selection::None);
        assert_eq!(controller.pile(0).len(), 1);
        assert_eq!(controller.pile(3).len(), 3);

        // 残った裏向きカードはクリックで表になる
        controller.pile_clicked(0);
        assert!(controller.pile(0)[0].is_face_up());
    }

    #[test]
    fn failed_run_move_keeps_run_and_selection_on_source() {
        let mut controller = controller_with(|world| {
            let from = world.stack_mut(StackType::Tableau(4));
            from.push(Card::new(Suit::Club, Rank::Three));
            from.push(face_up(Suit::Heart, Rank::Six));
            from.push(face_up(Suit::Spade, Rank::Five));
            from.push(face_up(Suit::Diamond, Rank::Four));
            world.stack_mut(StackType::Tableau(5)).push(face_up(Suit::Heart, Rank::Seven));
        });
        let source_before = controller.pile(4).to_vec();

        controller.pile_clicked(4);
        controller.pile_clicked(5); // 6♥ は 7♥ に置けない (同じ色)

        assert_eq!(controller.pile(4), source_before.as_slice());
        assert_eq!(controller.pile(5).len(), 1);
        assert_eq!(controller.selected_pile_index(), Some(4));
    }

    #[test]
    fn foundation_to_pile_move() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Foundation(0)).push(face_up(Suit::Heart, Rank::Ace));
            world.stack_mut(StackType::Foundation(0)).push(face_up(Suit::Heart, Rank::Two));
            world.stack_mut(StackType::Tableau(6)).push(face_up(Suit::Spade, Rank::Three));
        });

        controller.foundation_clicked(0);
        assert_eq!(controller.selected_foundation_index(), Some(0));
        controller.pile_clicked(6);

        assert_eq!(controller.selection(), Selection::None);
        assert_eq!(controller.foundation_top(0).map(Card::rank), Some(Rank::Ace));
        assert_eq!(controller.pile(6).len(), 2);
    }

    #[test]
    fn foundation_click_toggles_and_switches() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Foundation(0)).push(face_up(Suit::Heart, Rank::Ace));
            world.stack_mut(StackType::Foundation(1)).push(face_up(Suit::Club, Rank::Ace));
        });

        controller.foundation_clicked(3); // 空の組札は選べない
        assert_eq!(controller.selection(), Selection::None);

        controller.foundation_clicked(0);
        assert_eq!(controller.selected_foundation_index(), Some(0));
        controller.foundation_clicked(1);
        assert_eq!(controller.selected_foundation_index(), Some(1));
        controller.foundation_clicked(1);
        assert_eq!(controller.selection(), Selection::None);
    }

    #[test]
    fn waste_and_pile_to_foundation() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Waste).push(face_up(Suit::Spade, Rank::Ace));
            world.stack_mut(StackType::Tableau(0)).push(face_up(Suit::Club, Rank::Two));
        });

        controller.waste_clicked();
        controller.foundation_clicked(2);
        assert_eq!(controller.selection(), Selection::None);
        assert_eq!(controller.foundation_top(2).map(Card::rank), Some(Rank::Ace));

        controller.pile_clicked(0);
        controller.foundation_clicked(2);
        assert_eq!(controller.selection(), Selection::None);
        assert_eq!(controller.foundation_top(2).map(Card::rank), Some(Rank::Two));
        assert!(controller.pile(0).is_empty());
    }

    #[test]
    fn illegal_foundation_deposit_keeps_selection() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Waste).push(face_up(Suit::Spade, Rank::Two));
            world.stack_mut(StackType::Foundation(0)).push(face_up(Suit::Heart, Rank::Ace));
        });
        controller.waste_clicked();
        controller.foundation_clicked(0);
        assert!(controller.is_waste_selected(), "色違いの 2 は置けないので選択はそのまま");
        assert_eq!(controller.world().foundation(0).len(), 1);
    }

    #[test]
    fn last_king_wins_the_game() {
        let mut controller = controller_with(|world| {
            for (index, suit) in [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade].into_iter().enumerate() {
                for rank in crate::components::card::ALL_RANKS {
                    if suit == Suit::Spade && rank == Rank::King {
                        continue;
                    }
                    world.stack_mut(StackType::Foundation(index as u8)).push(face_up(suit, rank));
                }
            }
            world.stack_mut(StackType::Tableau(0)).push(face_up(Suit::Spade, Rank::King));
        });
        assert!(!controller.check_for_win());

        controller.pile_clicked(0);
        controller.foundation_clicked(3);

        assert!(controller.check_for_win());
        assert_eq!(controller.status(), GameStatus::Won);
        assert_eq!(controller.world().total_card_count(), DECK_SIZE);
    }

    #[test]
    fn moving_a_king_off_the_foundation_undoes_the_win() {
        let mut controller = controller_with(|world| {
            for (index, suit) in [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade].into_iter().enumerate() {
                for rank in crate::components::card::ALL_RANKS {
                    world.stack_mut(StackType::Foundation(index as u8)).push(face_up(suit, rank));
                }
            }
        });
        // 最後の1枚を置いた時と同じく、組札に置いた直後の判定で Won になる
        controller.win_condition.check(&mut controller.world);
        assert_eq!(controller.status(), GameStatus::Won);

        controller.foundation_clicked(3);
        assert_eq!(controller.selected_foundation_index(), Some(3));
        controller.pile_clicked(0);

        assert_eq!(controller.pile(0).len(), 1);
        assert_eq!(controller.pile(0)[0].rank(), Rank::King);
        assert!(!controller.check_for_win());
        assert_eq!(controller.status(), GameStatus::Playing);
    }

    #[test]
    fn waste_click_is_ignored_while_a_pile_is_selected() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Tableau(0)).push(face_up(Suit::Club, Rank::Nine));
            world.stack_mut(StackType::Waste).push(face_up(Suit::Heart, Rank::Four));
        });
        controller.pile_clicked(0);
        let before = controller.world().clone();

        controller.waste_clicked();
        assert_eq!(controller.selection(), Selection::Pile(0));
        assert_eq!(controller.world(), &before);
    }

    #[test]
    fn waste_click_is_ignored_while_a_foundation_is_selected() {
        let mut controller = controller_with(|world| {
            world.stack_mut(StackType::Foundation(1)).push(face_up(Suit::Spade, Rank::Ace));
            world.stack_mut(StackType::Waste).push(face_up(Suit::Heart, Rank::Four));
        });
        controller.foundation_clicked(1);
        let before = controller.world().clone();

        controller.waste_clicked();
        assert_eq!(controller.selection(), Selection::Foundation(1));
        assert_eq!(controller.world(), &before);
    }

    #[test]
    #[should_panic(expected = "範囲外")]
    fn pile_click_out_of_range_panics() {
        let mut controller = controller_with(|_| {});
        controller.pile_clicked(7);
    }

    #[test]
    #[should_panic(expected = "範囲外")]
    fn foundation_click_out_of_range_panics() {
        let mut controller = controller_with(|_| {});
        controller.foundation_clicked(4);
    }

    /// 決まった並びのデッキで最初から遊んでみるシナリオ。
    #[test]
    fn fixed_deck_end_to_end() {
        let deck = create_standard_deck();
        let mut world = World::with_stock(deck.clone());
        DealInitialCardsSystem.run(&mut world);
        let mut controller = SolitaireController::from_world(world);

        let last_pile = controller.pile(6);
        assert_eq!(last_pile.len(), 7);
        assert!(last_pile[6].is_face_up());
        assert!(last_pile[..6].iter().all(|card| !card.is_face_up()));

        let stock_before = controller.world().stock().to_vec();
        let third_from_top = &stock_before[stock_before.len() - 3];
        let expected = (third_from_top.suit(), third_from_top.rank());

        assert_eq!(controller.stock_clicked(), Some(StockAction::Drew(3)));
        let waste_top = controller.top_of_waste().unwrap();
        assert_eq!((waste_top.suit(), waste_top.rank()), expected);
        assert!(waste_top.is_face_up());
        assert_eq!(controller.world().total_card_count(), DECK_SIZE);
    }

    /// シード固定でランダムにクリックし続けても、カードは52枚のまま重複もしない。
    #[test]
    fn random_clicks_conserve_cards() {
        use std::collections::HashSet;

        let mut rng = StdRng::seed_from_u64(1234);
        let mut controller = SolitaireController::from_rng(&mut rng);
        for _ in 0..5_000 {
            match rng.gen_range(0..4) {
                0 => {
                    controller.stock_clicked();
                }
                1 => controller.waste_clicked(),
                2 => controller.pile_clicked(rng.gen_range(0..7)),
                _ => controller.foundation_clicked(rng.gen_range(0..4)),
            }
            let unique: HashSet<_> = controller.world().cards().map(|card| (card.suit(), card.rank())).collect();
            assert_eq!(unique.len(), DECK_SIZE);
            assert_eq!(controller.world().total_card_count(), DECK_SIZE);
        }
    }
}
