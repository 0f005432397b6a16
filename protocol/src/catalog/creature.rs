//! Creature records (`/pokemon/{id}`)

use serde::{Deserialize, Serialize};

use super::moves::MoveRef;

/// A creature as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,

    /// Learnable moves in catalog order
    #[serde(default)]
    pub moves: Vec<MoveEntry>,

    #[serde(default)]
    pub sprites: Sprites,
}

impl Creature {
    /// Create a creature with no moves and no sprites
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moves: Vec::new(),
            sprites: Sprites::default(),
        }
    }

    /// Add a learnable move
    pub fn with_move(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.moves.push(MoveEntry {
            r#move: MoveRef {
                name: name.into(),
                url: url.into(),
            },
        });
        self
    }

    /// Set the front and back sprite URLs
    pub fn with_sprites(mut self, front: impl Into<String>, back: impl Into<String>) -> Self {
        self.sprites = Sprites {
            front_default: Some(front.into()),
            back_default: Some(back.into()),
        };
        self
    }

    /// Get the move reference at an index
    pub fn move_at(&self, index: usize) -> Option<&MoveRef> {
        self.moves.get(index).map(|entry| &entry.r#move)
    }

    /// Number of learnable moves
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn front_sprite(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    pub fn back_sprite(&self) -> Option<&str> {
        self.sprites.back_default.as_deref()
    }
}

/// One entry of `moves[]`; the catalog nests the reference under `move`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub r#move: MoveRef,
}

/// Default sprite URLs (`null` for some forms)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub back_default: Option<String>,
}
