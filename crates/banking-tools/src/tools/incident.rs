//! Incident reporting: routes a grievance to a human specialist.

use std::fmt;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

const FRAUD_INCIDENTS: [&str; 3] = ["fraud", "scam", "duped"];
const LOSS_INCIDENTS: [&str; 3] = ["misplaced", "lost", "can't find"];

/// Human specialist an incident is diverted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialist {
    /// Handles fraud and scams.
    Fred,
    /// Handles lost or misplaced cards.
    Mitchell,
}

impl Specialist {
    /// Route an incident type, matched exactly and case-sensitively.
    ///
    /// Returns `None` when the type belongs to no routing set.
    pub fn for_incident(incident_type: &str) -> Option<Self> {
        if FRAUD_INCIDENTS.contains(&incident_type) {
            Some(Specialist::Fred)
        } else if LOSS_INCIDENTS.contains(&incident_type) {
            Some(Specialist::Mitchell)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialist::Fred => "Fred",
            Specialist::Mitchell => "Mitchell",
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diverts an incident to the specialist for its type.
///
/// # Parameters
///
/// - `incident_type` (required): free text; `fraud`, `scam`, `duped` go to
///   Fred and `misplaced`, `lost`, `can't find` go to Mitchell.
///
/// Any other value fails with [`ToolError::UnroutedIncident`].
#[derive(Debug, Default)]
pub struct ReportIncident;

impl ReportIncident {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for ReportIncident {
    fn name(&self) -> &str {
        "report_incident"
    }

    fn description(&self) -> &str {
        "Divert the incident to a human who specializes in handling grievances."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "incident_type": {
                    "type": "string",
                    "description": "Kind of incident, e.g. fraud, scam, duped, misplaced, lost, can't find"
                }
            },
            "required": ["incident_type"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let incident_type = args.get_string("incident_type")?;

        match Specialist::for_incident(&incident_type) {
            Some(specialist) => {
                debug!("Incident '{}' diverted to {}", incident_type, specialist);
                Ok(ToolOutput::single("divert_to", specialist.as_str()))
            }
            None => {
                warn!("No specialist for incident type '{}'", incident_type);
                Err(ToolError::UnroutedIncident(incident_type))
            }
        }
    }
}
