//! Turns hickory answer records into loose [`RawAnswer`] field bags.
//!
//! Two field styles exist because typed and generic lookups historically
//! name fields differently. Every answer carries `name`, `type` and `ttl`.

use ferrous_probe_domain::RawAnswer;
use hickory_proto::rr::{Name, RData, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// `address`, `primary`/`admin`/`minimum`.
    Typed,
    /// `data`, `mname`/`rname`/`minttl`.
    Generic,
}

pub struct AnswerEncoder;

impl AnswerEncoder {
    pub fn encode_all(records: &[Record], style: FieldStyle) -> Vec<RawAnswer> {
        records.iter().map(|r| Self::encode(r, style)).collect()
    }

    pub fn encode(record: &Record, style: FieldStyle) -> RawAnswer {
        let mut raw = RawAnswer::new()
            .with("name", name_to_string(record.name()))
            .with("type", record.record_type().to_string())
            .with("ttl", record.ttl());

        let address_key = match style {
            FieldStyle::Typed => "address",
            FieldStyle::Generic => "data",
        };

        match record.data() {
            RData::A(a) => raw.insert(address_key, a.to_string()),
            RData::AAAA(aaaa) => raw.insert(address_key, aaaa.to_string()),
            RData::CNAME(name) => raw.insert("data", name_to_string(name)),
            RData::NS(name) => raw.insert("data", name_to_string(name)),
            RData::PTR(name) => raw.insert("data", name_to_string(name)),
            RData::MX(mx) => {
                raw.insert("exchange", name_to_string(mx.exchange()));
                raw.insert("priority", mx.preference());
            }
            RData::SOA(soa) => {
                let (mname, rname, minttl) = match style {
                    FieldStyle::Typed => ("primary", "admin", "minimum"),
                    FieldStyle::Generic => ("mname", "rname", "minttl"),
                };
                raw.insert(mname, name_to_string(soa.mname()));
                raw.insert(rname, name_to_string(soa.rname()));
                raw.insert("serial", soa.serial());
                raw.insert("refresh", soa.refresh());
                raw.insert("retry", soa.retry());
                raw.insert("expire", soa.expire());
                raw.insert(minttl, soa.minimum());
            }
            RData::SRV(srv) => {
                raw.insert("priority", srv.priority());
                raw.insert("weight", srv.weight());
                raw.insert("port", srv.port());
                raw.insert("target", name_to_string(srv.target()));
            }
            RData::TXT(txt) => {
                let text: String = txt
                    .txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk))
                    .collect();
                raw.insert("data", text);
            }
            other => raw.insert("data", other.to_string()),
        }

        raw
    }
}

/// Presentation form without the trailing root dot, except for the root itself.
fn name_to_string(name: &Name) -> String {
    let utf8 = name.to_utf8();
    match utf8.strip_suffix('.') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => utf8,
    }
}
