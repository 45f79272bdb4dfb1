//! Report module - line-delimited JSON state messages
//!
//! One `state` object is emitted per handled input line in `--json` mode:
//! `{"type":"state","seq":1,"outcome":"played","message":"...","queue":[...],
//! "stack":[...],"undo_available":true}`

use serde::{Deserialize, Serialize};

use crate::core::Session;
use crate::types::{Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateType {
    #[serde(rename = "state")]
    State,
}

impl Default for StateType {
    fn default() -> Self {
        Self::State
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKindLower {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl From<PieceKind> for PieceKindLower {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::O => Self::O,
            PieceKind::T => Self::T,
            PieceKind::L => Self::L,
            PieceKind::J => Self::J,
            PieceKind::S => Self::S,
            PieceKind::Z => Self::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceReport {
    pub id: u32,
    pub kind: PieceKindLower,
}

impl From<&Piece> for PieceReport {
    fn from(value: &Piece) -> Self {
        Self {
            id: value.id,
            kind: value.kind.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateReport {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: StateType,
    pub seq: u64,
    /// Outcome tag of the operation, absent for undo and invalid input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub message: String,
    /// Front to back.
    pub queue: Vec<PieceReport>,
    /// Top to base.
    pub stack: Vec<PieceReport>,
    pub undo_available: bool,
}

impl StateReport {
    pub fn from_session(
        seq: u64,
        session: &Session,
        outcome: Option<&str>,
        message: &str,
    ) -> Self {
        Self {
            msg_type: StateType::State,
            seq,
            outcome: outcome.map(str::to_string),
            message: message.to_string(),
            queue: session.queue_view().map(PieceReport::from).collect(),
            stack: session.stack_view().map(PieceReport::from).collect(),
            undo_available: session.undo_available(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationKind;

    #[test]
    fn test_report_shape() {
        let mut session = Session::new(5);
        session.step(OperationKind::Reserve);

        let report = StateReport::from_session(1, &session, Some("reserved"), "reserved");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["type"], "state");
        assert_eq!(json["seq"], 1);
        assert_eq!(json["outcome"], "reserved");
        assert_eq!(json["queue"].as_array().unwrap().len(), 5);
        assert_eq!(json["stack"][0]["id"], 1);
        assert_eq!(json["undo_available"], true);

        let kind = json["stack"][0]["kind"].as_str().unwrap();
        assert!(PieceKind::from_str(kind).is_some());
    }

    #[test]
    fn test_outcome_omitted_when_absent() {
        let session = Session::new(5);
        let report = StateReport::from_session(2, &session, None, "nothing to undo");
        let line = serde_json::to_string(&report).unwrap();
        assert!(!line.contains("outcome"));

        let back: StateReport = serde_json::from_str(&line).unwrap();
        assert_eq!(back, report);
    }
}
