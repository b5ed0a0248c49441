use ferrous_probe_application::services::{NormalizationStrategy, RecordNormalizer};
use ferrous_probe_domain::{NormalizedAnswer, RawAnswer, RecordType};
use serde_json::{json, Value};

fn normalized_json(record_type: RecordType, answers: &[RawAnswer]) -> Value {
    serde_json::to_value(RecordNormalizer::normalize(record_type, answers)).unwrap()
}

#[test]
fn test_strategy_table() {
    assert_eq!(
        NormalizationStrategy::for_type(RecordType::A),
        NormalizationStrategy::Address
    );
    assert_eq!(
        NormalizationStrategy::for_type(RecordType::AAAA),
        NormalizationStrategy::Address
    );
    assert_eq!(NormalizationStrategy::for_type(RecordType::MX), NormalizationStrategy::Mx);
    assert_eq!(NormalizationStrategy::for_type(RecordType::SOA), NormalizationStrategy::Soa);
    assert_eq!(NormalizationStrategy::for_type(RecordType::SRV), NormalizationStrategy::Srv);
    for rt in [
        RecordType::CNAME,
        RecordType::NS,
        RecordType::PTR,
        RecordType::TXT,
        RecordType::CAA,
    ] {
        assert_eq!(NormalizationStrategy::for_type(rt), NormalizationStrategy::Data);
    }
}

#[test]
fn test_a_record_from_address_field() {
    let answers = [RawAnswer::new().with("address", "1.2.3.4")];
    assert_eq!(
        RecordNormalizer::normalize(RecordType::A, &answers),
        vec![NormalizedAnswer::address("1.2.3.4")]
    );
}

#[test]
fn test_a_record_from_data_alias() {
    let answers = [RawAnswer::new().with("data", "1.2.3.4")];
    assert_eq!(normalized_json(RecordType::A, &answers), json!(["1.2.3.4"]));
}

#[test]
fn test_address_field_wins_over_data() {
    let answers = [RawAnswer::new()
        .with("address", "2001:db8::1")
        .with("data", "ignored")];
    assert_eq!(normalized_json(RecordType::AAAA, &answers), json!(["2001:db8::1"]));
}

#[test]
fn test_address_without_any_field_is_null() {
    let answers = [RawAnswer::new().with("ttl", 60)];
    assert_eq!(normalized_json(RecordType::A, &answers), json!([null]));
}

#[test]
fn test_order_is_preserved() {
    let answers = [
        RawAnswer::new().with("address", "10.0.0.3"),
        RawAnswer::new().with("data", "10.0.0.1"),
        RawAnswer::new().with("address", "10.0.0.2"),
    ];
    assert_eq!(
        normalized_json(RecordType::A, &answers),
        json!(["10.0.0.3", "10.0.0.1", "10.0.0.2"])
    );
}

#[test]
fn test_mx_record() {
    let answers = [RawAnswer::new()
        .with("exchange", "mail.example.com")
        .with("priority", 10)
        .with("ttl", 300)];
    assert_eq!(
        normalized_json(RecordType::MX, &answers),
        json!([{"exchange": "mail.example.com", "priority": 10}])
    );
}

#[test]
fn test_soa_record_with_primary_admin_names() {
    let answers = [RawAnswer::new()
        .with("primary", "ns1.example.com")
        .with("admin", "hostmaster.example.com")
        .with("serial", 2024010101u64)
        .with("refresh", 7200)
        .with("retry", 3600)
        .with("expire", 1209600)
        .with("minimum", 300)];
    assert_eq!(
        normalized_json(RecordType::SOA, &answers),
        json!([{
            "mname": "ns1.example.com",
            "rname": "hostmaster.example.com",
            "serial": 2024010101u64,
            "refresh": 7200,
            "retry": 3600,
            "expire": 1209600,
            "minttl": 300
        }])
    );
}

#[test]
fn test_soa_record_with_rfc_names() {
    let primary_style = [RawAnswer::new()
        .with("primary", "ns1.example.com")
        .with("admin", "hostmaster.example.com")
        .with("minimum", 60)];
    let rfc_style = [RawAnswer::new()
        .with("mname", "ns1.example.com")
        .with("rname", "hostmaster.example.com")
        .with("minttl", 60)];

    assert_eq!(
        RecordNormalizer::normalize(RecordType::SOA, &primary_style),
        RecordNormalizer::normalize(RecordType::SOA, &rfc_style)
    );
}

#[test]
fn test_srv_record() {
    let answers = [RawAnswer::new()
        .with("priority", 10)
        .with("weight", 5)
        .with("port", 5060)
        .with("target", "sip.example.com")];
    assert_eq!(
        normalized_json(RecordType::SRV, &answers),
        json!([{"priority": 10, "weight": 5, "port": 5060, "target": "sip.example.com"}])
    );
}

#[test]
fn test_out_of_range_numbers_are_dropped() {
    let answers = [RawAnswer::new()
        .with("exchange", "mail.example.com")
        .with("priority", 70000)];
    assert_eq!(
        normalized_json(RecordType::MX, &answers),
        json!([{"exchange": "mail.example.com"}])
    );
}

#[test]
fn test_generic_types_extract_data() {
    let answers = [
        RawAnswer::new().with("data", "v=spf1 -all").with("ttl", 300),
        RawAnswer::new().with("data", "google-site-verification=abc"),
    ];
    assert_eq!(
        normalized_json(RecordType::TXT, &answers),
        json!(["v=spf1 -all", "google-site-verification=abc"])
    );
}

#[test]
fn test_generic_types_pass_raw_through_without_data() {
    let raw = RawAnswer::new()
        .with("flags", 0)
        .with("tag", "issue")
        .with("value", "letsencrypt.org");
    assert_eq!(
        normalized_json(RecordType::CAA, &[raw]),
        json!([{"flags": 0, "tag": "issue", "value": "letsencrypt.org"}])
    );
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(RecordNormalizer::normalize(RecordType::CNAME, &[]).is_empty());
}
