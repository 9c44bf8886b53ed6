//! Alert model and reducer.

use keeper_store::{Reducer, StoreAction};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Visual weight of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
    Success,
    Info,
    Light,
    Dark,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertKind::Danger => "danger",
            AlertKind::Success => "success",
            AlertKind::Info => "info",
            AlertKind::Light => "light",
            AlertKind::Dark => "dark",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub message: String,
    pub kind: AlertKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    SetAlert(Alert),
    RemoveAlert(Uuid),
}

impl StoreAction for AlertAction {
    fn name(&self) -> &'static str {
        match self {
            AlertAction::SetAlert(_) => "SET_ALERT",
            AlertAction::RemoveAlert(_) => "REMOVE_ALERT",
        }
    }
}

/// Reducer over the visible alerts, in insertion order.
pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = Vec<Alert>;
    type Action = AlertAction;
    const NAME: &'static str = "alerts";

    fn reduce(state: &Vec<Alert>, action: AlertAction) -> Vec<Alert> {
        match action {
            AlertAction::SetAlert(alert) => {
                let mut next = state.clone();
                next.push(alert);
                next
            }
            AlertAction::RemoveAlert(id) => state.iter().filter(|a| a.id != id).cloned().collect(),
        }
    }
}
