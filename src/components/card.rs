// src/components/card.rs

use std::fmt;

// serde を使う宣言！JS 側にスナップショットを JSON で渡す時に使うよ！
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq, Hash: 比較したり HashSet に入れたりできるように
/// - Serialize, Deserialize: JSON に変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

impl Suit {
    /// ハートとダイヤなら赤！
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamond | Suit::Heart)
    }

    fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）だよ！ A=1, 2, ..., J=11, Q=12, K=13
///
/// PartialOrd, Ord も付けて大小比較できるようにしておくよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// 1〜13 の数値を返すよ。ルール判定の「ひとつ上/ひとつ下」はこれで比べる。
    pub fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全スートの配列。デッキ生成の順番もこれ (♣ ♦ ♥ ♠)。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランクの配列 (A → K)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの色（赤か黒か）を表すヘルパーenumだよ。❤️🖤
/// 場札は「色違い」、組札は「同じ色」で積むからよく使う！
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        if suit.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }
}

/// カード1枚を表す構造体だよ！🃏
///
/// スートとランクはデッキを作った瞬間に決まって、それ以降は変わらない。
/// 変わるのは表向き/裏向きだけ！だからフィールドは非公開にして、
/// `turn_up` / `turn_down` でだけ向きを変えられるようにしてるよ。
///
/// Copy は付けない。カードは場所から場所へ「移動」するもので、複製されちゃダメ！🙅‍♀️
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作るよ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// 表向きにする。何回呼んでも結果は同じ。
    pub fn turn_up(&mut self) {
        self.is_face_up = true;
    }

    /// 裏向きにする。こっちも何回呼んでもOK。
    pub fn turn_down(&mut self) {
        self.is_face_up = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
