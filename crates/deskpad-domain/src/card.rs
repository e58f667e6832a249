use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;

pub type CardId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    /// Transient completion-animation marker, never part of exported state.
    #[serde(skip)]
    pub moving: bool,
}

impl Card {
    pub fn new(column_id: ColumnId, title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            column_id,
            title,
            description,
            moving: false,
        }
    }
}
