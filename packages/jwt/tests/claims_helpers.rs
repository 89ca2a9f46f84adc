//! Tests for claims accessors and the claims builder

use chrono::{Duration, Utc};
use jwt_codec::{decode, encode, Algorithm, Claims, ClaimsBuilder, JwtError};
use serde_json::{json, Map, Value};

#[test]
fn test_builder_sets_registered_claims() {
    let claims = ClaimsBuilder::new()
        .subject("test-user")
        .issuer("test-issuer")
        .issued_at(1_600_000_000)
        .expires_at(1_600_003_600)
        .build();

    assert_eq!(claims.subject(), Some("test-user"));
    assert_eq!(claims.issuer(), Some("test-issuer"));
    assert_eq!(claims.issued_at(), Some(1_600_000_000));
    assert_eq!(claims.expiration(), Ok(Some(1_600_003_600)));
    assert_eq!(claims.len(), 4);
}

#[test]
fn test_builder_relative_times() {
    let before = Utc::now().timestamp();
    let claims = ClaimsBuilder::new()
        .issued_now()
        .expires_in(Duration::hours(1))
        .build();
    let after = Utc::now().timestamp();

    let iat = claims.issued_at().expect("iat set");
    let exp = claims
        .expiration()
        .expect("exp readable")
        .expect("exp set");
    assert!(iat >= before && iat <= after);
    assert!(exp >= before + 3600 && exp <= after + 3600);
}

#[test]
fn test_builder_custom_claims() {
    let claims = ClaimsBuilder::new()
        .subject("custom-data-test")
        .claim("role", "admin")
        .claim("permissions", json!(["read", "write", "delete"]))
        .build();

    assert_eq!(claims.get("role"), Some(&json!("admin")));
    assert_eq!(
        claims.get("permissions"),
        Some(&json!(["read", "write", "delete"]))
    );
    assert!(claims.contains("sub"));
    assert!(!claims.contains("exp"));
}

#[test]
fn test_accessors_ignore_wrong_shapes() {
    let claims = Claims::try_from(json!({"sub": 42, "iss": ["a"], "iat": "1"}))
        .expect("object claims");

    assert_eq!(claims.subject(), None);
    assert_eq!(claims.issuer(), None);
    assert_eq!(claims.issued_at(), None);
    assert_eq!(claims.expiration(), Ok(None));
}

#[test]
fn test_expiration_accessor_is_tolerant() {
    let read = |exp: Value| {
        Claims::try_from(json!({ "exp": exp }))
            .expect("object claims")
            .expiration()
    };

    assert_eq!(read(json!(10)), Ok(Some(10)));
    assert_eq!(read(json!(10.99)), Ok(Some(10)));
    assert_eq!(read(json!("10")), Ok(Some(10)));
    assert!(matches!(read(json!("ten")), Err(JwtError::InvalidExpiration(_))));
}

#[test]
fn test_mutation_and_conversion() {
    let mut claims = Claims::new();
    assert!(claims.is_empty());
    assert_eq!(claims.insert("sub", "alice"), None);
    assert_eq!(claims.insert("sub", "bob"), Some(json!("alice")));
    assert_eq!(claims.remove("sub"), Some(json!("bob")));
    assert!(claims.is_empty());

    let mut map = Map::new();
    map.insert("k".to_string(), json!(1));
    let claims = Claims::from(map.clone());
    assert_eq!(claims.iter().count(), 1);
    assert_eq!(claims.clone().into_inner(), map);
    assert_eq!(Value::from(claims), json!({"k": 1}));

    assert!(matches!(
        Claims::try_from(json!([1, 2])),
        Err(JwtError::InvalidPayload(_))
    ));
}

#[test]
fn test_claims_serialize_as_plain_object() {
    let claims = ClaimsBuilder::new()
        .subject("serialization-test")
        .issuer("test-issuer")
        .build();

    let json = serde_json::to_string(&claims).expect("Should serialize to JSON");
    assert_eq!(json, r#"{"iss":"test-issuer","sub":"serialization-test"}"#);

    let deserialized: Claims = serde_json::from_str(&json).expect("Should deserialize from JSON");
    assert_eq!(deserialized, claims);
}

#[test]
fn test_decoded_claims_are_independent_of_token() {
    let algorithm = Algorithm::HS256(b"independent");
    let original = ClaimsBuilder::new().subject("alice").build();
    let token = encode(&original, Some(&algorithm)).expect("encode succeeds");

    let mut decoded = decode(&token, &[algorithm]).expect("decode succeeds");
    drop(token);
    decoded.insert("sub", "mallory");

    assert_eq!(original.subject(), Some("alice"));
    assert_eq!(decoded.subject(), Some("mallory"));
}

#[test]
fn test_builder_relative_expiry_saturates() {
    let far_future = ClaimsBuilder::new().expires_in(Duration::MAX).build();
    assert_eq!(far_future.expiration(), Ok(Some(i64::MAX)));

    let far_past = ClaimsBuilder::new().expires_in(Duration::MIN).build();
    assert_eq!(far_past.expiration(), Ok(Some(i64::MIN)));
}
