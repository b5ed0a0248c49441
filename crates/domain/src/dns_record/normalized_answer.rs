use serde::Serialize;
use serde_json::Value;

/// Canonical per-type answer shape returned to clients.
///
/// Serialized untagged, so an A record renders as a bare string and an MX
/// record as `{"exchange": .., "priority": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedAnswer {
    Address(Option<String>),
    Mx(MxAnswer),
    Soa(SoaAnswer),
    Srv(SrvAnswer),
    Data(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MxAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoaAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minttl: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SrvAnswer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl NormalizedAnswer {
    pub fn address(address: impl Into<String>) -> Self {
        Self::Address(Some(address.into()))
    }

    pub fn as_address(&self) -> Option<&str> {
        match self {
            Self::Address(address) => address.as_deref(),
            _ => None,
        }
    }
}
