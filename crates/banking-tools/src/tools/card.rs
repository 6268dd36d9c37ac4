//! Card lock/unlock tools.
//!
//! Both are stubs: the card id is required and must be an integer, but no
//! card state exists anywhere and the reported status is fixed.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Status reported by the card tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Locked,
    Unlocked,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Locked => "locked",
            CardStatus::Unlocked => "unlocked",
        }
    }
}

fn card_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "card_id": {
                "type": "integer",
                "description": "Identifier of the card"
            }
        },
        "required": ["card_id"]
    })
}

fn card_output(args: &ToolArgs, status: CardStatus) -> Result<ToolOutput, ToolError> {
    let card_id = args.get_integer("card_id")?;
    debug!("Card {} -> {}", card_id, status.as_str());
    Ok(ToolOutput::single("card_status", status.as_str()))
}

/// Locks a card. Always reports `locked`.
#[derive(Debug, Default)]
pub struct LockCard;

impl LockCard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for LockCard {
    fn name(&self) -> &str {
        "lock_card"
    }

    fn description(&self) -> &str {
        "Given the id of the card, lock the card"
    }

    fn parameters(&self) -> Value {
        card_parameters()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        card_output(&args, CardStatus::Locked)
    }
}

/// Unlocks a card. Always reports `unlocked`.
#[derive(Debug, Default)]
pub struct UnlockCard;

impl UnlockCard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for UnlockCard {
    fn name(&self) -> &str {
        "unlock_card"
    }

    fn description(&self) -> &str {
        "Given the id of the card, unlock the card"
    }

    fn parameters(&self) -> Value {
        card_parameters()
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        card_output(&args, CardStatus::Unlocked)
    }
}
