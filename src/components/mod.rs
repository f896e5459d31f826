// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod game_state;
pub mod selection; // 2回クリック操作の「1回目」を覚えておく場所！👆
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use selection::Selection;
pub use stack::StackType;
