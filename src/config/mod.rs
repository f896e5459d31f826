// src/config/mod.rs
//! ゲームの固定設定をまとめるモジュールだよ。

pub mod rules;
