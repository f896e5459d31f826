// src/config/rules.rs
//! クロンダイクのルールに関する定数を定義するよ！
//! 列の数や一度にめくる枚数など。ルールの切り替えはしないので全部固定！

pub const DECK_SIZE: usize = 52; // デッキの枚数
pub const TABLEAU_COUNT: usize = 7; // 場札の列の数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数
pub const DRAW_COUNT: usize = 3; // 山札を1回クリックでめくる枚数

/// 場札に配る枚数 (1 + 2 + ... + 7 = 28)
pub const DEALT_CARD_COUNT: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// 配り終わった後に山札に残る枚数
pub const STOCK_AFTER_DEAL: usize = DECK_SIZE - DEALT_CARD_COUNT;
