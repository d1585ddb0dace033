use serde::{Deserialize, Serialize};

use crate::types::*;

/// OTA settings form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum OtaEvent {
    Load,
    Reset,
    SetEnabled(bool),
    SetPort(String),
    SetPassword(String),
    Submit,

    #[serde(skip)]
    LoadResponse(Result<OtaSettings, String>),
    #[serde(skip)]
    SaveResponse(Result<OtaSettings, String>),
}

/// Access point settings form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ApEvent {
    Load,
    Reset,
    SetProvisioningMode(ProvisioningMode),
    SetSsid(String),
    SetPassword(String),
    SetHost(String),
    Submit,

    #[serde(skip)]
    LoadResponse(Result<ApSettings, String>),
    #[serde(skip)]
    SaveResponse(Result<ApSettings, String>),
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
    SetAuthToken(Option<String>),
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Ota(OtaEvent),
    AccessPoint(ApEvent),
    Ui(UiEvent),
}
