// src/logic/mod.rs
//! ゲームのロジック (デッキ作りとルール判定) をまとめるモジュールだよ！🃏✅

pub mod deck;
pub mod rules;
