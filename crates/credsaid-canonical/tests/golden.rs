use credsaid_canonical::{lookup, Canonicalizer, Said, BLAKE3_256, DEFAULT_CODE};
use serde_json::json;

fn said_of(bytes: &[u8]) -> Said {
    let alg = lookup(DEFAULT_CODE).unwrap();
    Said::encode(alg, &alg.digest(bytes).unwrap()).unwrap()
}

#[test]
fn blake3_matches_reference_vectors() {
    assert_eq!(
        hex::encode(BLAKE3_256.digest(b"").unwrap()),
        "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
    );
    assert_eq!(
        hex::encode(BLAKE3_256.digest(b"abc").unwrap()),
        "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85"
    );
}

#[test]
fn blake3_multi_chunk_vector() {
    let input: Vec<u8> = (0..1025).map(|i| (i % 251) as u8).collect();
    assert_eq!(
        hex::encode(BLAKE3_256.digest(&input).unwrap()),
        "d00278ae47eb27b34faecf67b4fe263f82d5412916c1ffd97c8cb7fb814b8444"
    );
}

#[test]
fn empty_input_identifier() {
    assert_eq!(
        said_of(b"").as_str(),
        "EK8TSbn1-aGmoEBN6jbcyUmbyyXJrcESt8yak8rkHzJi"
    );
}

#[test]
fn placeholder_document_identifier() {
    let document = json!({
        "d": "############################################",
        "name": "alpha",
        "n": "1"
    });
    let bytes = Canonicalizer::new().canonicalize(&document).unwrap();
    assert_eq!(
        bytes,
        b"{\"d\":\"############################################\",\"name\":\"alpha\",\"n\":\"1\"}".to_vec()
    );
    assert_eq!(
        said_of(&bytes).as_str(),
        "EB5x_uer9qofgt4QJ750dxBJDCL6oIAtW9QiRXvzdRlv"
    );
}

#[test]
fn identifier_serializes_as_bare_string() {
    let said = Said::parse("EB5x_uer9qofgt4QJ750dxBJDCL6oIAtW9QiRXvzdRlv").unwrap();
    assert_eq!(
        serde_json::to_string(&said).unwrap(),
        r#""EB5x_uer9qofgt4QJ750dxBJDCL6oIAtW9QiRXvzdRlv""#
    );
    assert_eq!(said.algorithm().unwrap(), &BLAKE3_256);
}
