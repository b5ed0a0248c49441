//! Maps client-specific raw answers onto the canonical per-type shapes.
//!
//! DNS clients disagree on field names for the same logical value. The alias
//! lists below are ordered: the first populated source field wins. They are a
//! compatibility shim and new clients should emit the first name of each list.

use ferrous_probe_domain::{
    dns_record::{MxAnswer, SoaAnswer, SrvAnswer},
    NormalizedAnswer, RawAnswer, RecordType,
};

const ADDRESS_FIELDS: &[&str] = &["address", "data"];
const DATA_FIELDS: &[&str] = &["data"];

const MX_EXCHANGE_FIELDS: &[&str] = &["exchange"];
const MX_PRIORITY_FIELDS: &[&str] = &["priority"];

const SOA_MNAME_FIELDS: &[&str] = &["primary", "mname"];
const SOA_RNAME_FIELDS: &[&str] = &["admin", "rname"];
const SOA_SERIAL_FIELDS: &[&str] = &["serial"];
const SOA_REFRESH_FIELDS: &[&str] = &["refresh"];
const SOA_RETRY_FIELDS: &[&str] = &["retry"];
const SOA_EXPIRE_FIELDS: &[&str] = &["expire"];
const SOA_MINTTL_FIELDS: &[&str] = &["minimum", "minttl"];

const SRV_PRIORITY_FIELDS: &[&str] = &["priority"];
const SRV_WEIGHT_FIELDS: &[&str] = &["weight"];
const SRV_PORT_FIELDS: &[&str] = &["port"];
const SRV_TARGET_FIELDS: &[&str] = &["target"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationStrategy {
    Address,
    Mx,
    Soa,
    Srv,
    Data,
}

impl NormalizationStrategy {
    pub fn for_type(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A | RecordType::AAAA => Self::Address,
            RecordType::MX => Self::Mx,
            RecordType::SOA => Self::Soa,
            RecordType::SRV => Self::Srv,
            RecordType::CNAME
            | RecordType::NS
            | RecordType::PTR
            | RecordType::TXT
            | RecordType::CAA => Self::Data,
        }
    }
}

pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Normalize every answer, keeping upstream order.
    pub fn normalize(record_type: RecordType, answers: &[RawAnswer]) -> Vec<NormalizedAnswer> {
        let strategy = NormalizationStrategy::for_type(record_type);
        answers
            .iter()
            .map(|raw| Self::normalize_one(strategy, raw))
            .collect()
    }

    pub fn normalize_one(strategy: NormalizationStrategy, raw: &RawAnswer) -> NormalizedAnswer {
        match strategy {
            NormalizationStrategy::Address => {
                NormalizedAnswer::Address(raw.first_str(ADDRESS_FIELDS))
            }
            NormalizationStrategy::Mx => NormalizedAnswer::Mx(MxAnswer {
                exchange: raw.first_str(MX_EXCHANGE_FIELDS),
                priority: u16_field(raw, MX_PRIORITY_FIELDS),
            }),
            NormalizationStrategy::Soa => NormalizedAnswer::Soa(SoaAnswer {
                mname: raw.first_str(SOA_MNAME_FIELDS),
                rname: raw.first_str(SOA_RNAME_FIELDS),
                serial: u32_field(raw, SOA_SERIAL_FIELDS),
                refresh: u32_field(raw, SOA_REFRESH_FIELDS),
                retry: u32_field(raw, SOA_RETRY_FIELDS),
                expire: u32_field(raw, SOA_EXPIRE_FIELDS),
                minttl: u32_field(raw, SOA_MINTTL_FIELDS),
            }),
            NormalizationStrategy::Srv => NormalizedAnswer::Srv(SrvAnswer {
                priority: u16_field(raw, SRV_PRIORITY_FIELDS),
                weight: u16_field(raw, SRV_WEIGHT_FIELDS),
                port: u16_field(raw, SRV_PORT_FIELDS),
                target: raw.first_str(SRV_TARGET_FIELDS),
            }),
            NormalizationStrategy::Data => match raw.first_populated(DATA_FIELDS) {
                Some(data) => NormalizedAnswer::Data(data.clone()),
                None => NormalizedAnswer::Data(raw.to_value()),
            },
        }
    }
}

fn u16_field(raw: &RawAnswer, names: &[&str]) -> Option<u16> {
    raw.first_u64(names).and_then(|v| u16::try_from(v).ok())
}

fn u32_field(raw: &RawAnswer, names: &[&str]) -> Option<u32> {
    raw.first_u64(names).and_then(|v| u32::try_from(v).ok())
}
