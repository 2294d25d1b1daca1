use arpa_ptr_domain::{DnsClass, PtrAnswer, RecordType, PTR_TTL};

#[test]
fn test_ptr_answer_fixed_fields() {
    let answer = PtrAnswer::new("5.0.0.10.in-addr.arpa.", "web.example.com.");

    assert_eq!(answer.ttl, 60);
    assert_eq!(answer.ttl, PTR_TTL);
    assert_eq!(answer.record_type(), RecordType::PTR);
    assert_eq!(answer.dns_class(), DnsClass::IN);
}

#[test]
fn test_ptr_answer_keeps_query_name_verbatim() {
    let answer = PtrAnswer::new("5.0.0.10.IN-ADDR.ARPA", "web.example.com.");
    assert_eq!(answer.name, "5.0.0.10.IN-ADDR.ARPA");
}

#[test]
fn test_ptr_answer_display() {
    let answer = PtrAnswer::new("5.0.0.10.in-addr.arpa.", "web.example.com.");
    assert_eq!(
        answer.to_string(),
        "5.0.0.10.in-addr.arpa. 60 IN PTR web.example.com."
    );
}

#[test]
fn test_record_type_round_trip() {
    for record_type in [RecordType::A, RecordType::AAAA, RecordType::PTR] {
        assert_eq!(RecordType::from_str(record_type.as_str()), Some(record_type));
    }
    assert_eq!(RecordType::from_str("ptr"), Some(RecordType::PTR));
    assert_eq!(RecordType::from_str("MX"), None);
}
