//! Player identity.
//!
//! The game is strictly two-player, so `Player` is a closed enum rather
//! than a numeric ID. Cell ownership is `Option<Player>`: `None` until a
//! cell is claimed, `Some(player)` forever after. Display names, colors,
//! and any other presentation mapping belong to the caller.

use serde::{Deserialize, Serialize};

/// One of the two players. `Player::One` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0-based index, for score arrays and the like.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1-based number as written on a score sheet.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Both players, first mover first.
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
