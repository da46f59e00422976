use super::*;
use proptest::prelude::*;

const SECRET_HEX: &str = "67dea2ed018072d675f5415ecfaed7d2597555e202d85b3d65ea4e58d2d92ffa";
const NSEC: &str = "nsec1vl029mgpspedva04g90vltkh6fvh240zqtv9k0t9af8935ke9laqsnlfe5";
const PUBLIC_HEX: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";
const NPUB: &str = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";

#[test]
fn test_bip173_valid_strings() {
    for s in ["a12uel5l", "A12UEL5L"] {
        let (hrp, data) = bech32::decode(s).expect(s);
        assert_eq!(hrp, "a");
        assert!(data.is_empty());
    }
    assert_eq!(bech32::encode("a", &[]).expect("encode"), "a12uel5l");
}

#[test]
fn test_bip173_invalid_strings() {
    assert_eq!(
        bech32::decode("A1G7SGD8"),
        Err(Bech32Error::InvalidChecksum)
    );
    assert_eq!(bech32::decode("li1dgmt3"), Err(Bech32Error::InvalidLength));
    assert_eq!(
        bech32::decode("pzry9x0s0muk"),
        Err(Bech32Error::MissingSeparator)
    );
    assert_eq!(
        bech32::decode("1pzry9x0s0muk"),
        Err(Bech32Error::InvalidLength)
    );
    assert_eq!(
        bech32::decode("x1b4n0q5v"),
        Err(Bech32Error::InvalidChar('b'))
    );
    assert_eq!(bech32::decode("a12UEL5L"), Err(Bech32Error::MixedCase));
    assert_eq!(
        bech32::decode("a1 2uel5l"),
        Err(Bech32Error::InvalidChar(' '))
    );
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        bech32::encode("abc", &[0, 1, 2, 255]).expect("encode"),
        "abc1qqqs9lc9mlkkq"
    );
}

#[test]
fn test_nip19_npub_vector() {
    assert_eq!(encode_npub(PUBLIC_HEX).expect("encode"), NPUB);
    assert_eq!(decode_npub(NPUB).expect("decode"), PUBLIC_HEX);
    assert_eq!(parse_public_key(NPUB).expect("parse"), PUBLIC_HEX);
}

#[test]
fn test_nip19_nsec_vector() {
    assert_eq!(encode_nsec(SECRET_HEX).expect("encode"), NSEC);
    assert_eq!(decode_nsec(NSEC).expect("decode"), SECRET_HEX);
    assert_eq!(parse_private_key(NSEC).expect("parse"), SECRET_HEX);
}

#[test]
fn test_derive_matches_npub_vector() {
    assert_eq!(derive_public_key(SECRET_HEX).expect("derive"), PUBLIC_HEX);
}

#[test]
fn test_generator_npub() {
    let mut one = "0".repeat(63);
    one.push('1');
    let gx = derive_public_key(&one).expect("derive");
    assert_eq!(
        encode_npub(&gx).expect("encode"),
        "npub10xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqpkge6d"
    );
}

#[test]
fn test_derive_rejects_out_of_range() {
    let zero = "0".repeat(64);
    assert_eq!(
        derive_public_key(&zero),
        Err(Nip19Error::Key(schnorr::SchnorrError::InvalidKeyRange))
    );
}

#[test]
fn test_parse_private_key_hex() {
    let upper = SECRET_HEX.to_ascii_uppercase();
    assert_eq!(parse_private_key(&upper).expect("parse"), SECRET_HEX);
    assert_eq!(
        parse_private_key(&format!("  {SECRET_HEX}\n")).expect("parse"),
        SECRET_HEX
    );
}

#[test]
fn test_parse_private_key_uppercase_nsec() {
    assert_eq!(
        parse_private_key(&NSEC.to_ascii_uppercase()).expect("parse"),
        SECRET_HEX
    );
}

#[test]
fn test_parse_private_key_rejects_garbage() {
    assert_eq!(parse_private_key(""), Err(Nip19Error::InvalidKeyFormat));
    assert_eq!(
        parse_private_key(&SECRET_HEX[..63]),
        Err(Nip19Error::InvalidKeyFormat)
    );
    assert_eq!(
        parse_private_key(&format!("{}g", &SECRET_HEX[..63])),
        Err(Nip19Error::InvalidKeyFormat)
    );
    // An npub is not a private key.
    assert_eq!(parse_private_key(NPUB), Err(Nip19Error::InvalidKeyFormat));
}

#[test]
fn test_parse_private_key_bad_nsec_checksum() {
    let mut broken = NSEC.to_string();
    broken.pop();
    broken.push('6');
    assert_eq!(
        parse_private_key(&broken),
        Err(Nip19Error::InvalidBech32(Bech32Error::InvalidChecksum))
    );
}

#[test]
fn test_decode_wrong_prefix() {
    assert_eq!(
        decode_nsec(NPUB),
        Err(Nip19Error::UnexpectedPrefix {
            expected: NSEC_HRP,
            found: "npub".to_string(),
        })
    );
}

#[test]
fn test_decode_wrong_payload_length() {
    let short = bech32::encode(NPUB_HRP, &[1u8; 31]).expect("encode");
    assert_eq!(decode_npub(&short), Err(Nip19Error::InvalidPayloadLength(31)));
}

#[test]
fn test_encode_rejects_bad_hex() {
    assert_eq!(encode_npub("xyz"), Err(Nip19Error::InvalidHex));
    assert_eq!(
        encode_npub(&PUBLIC_HEX[..62]),
        Err(Nip19Error::InvalidPayloadLength(31))
    );
}

#[test]
fn test_shorten_pubkey() {
    assert_eq!(shorten_pubkey(PUBLIC_HEX, 12), "npub10elfcs4...");
    assert_eq!(
        shorten_pubkey(PUBLIC_HEX, DEFAULT_SHORTEN_WIDTH),
        format!("{}...", &NPUB[..DEFAULT_SHORTEN_WIDTH])
    );
}

#[test]
fn test_shorten_pubkey_falls_back_to_raw_input() {
    assert_eq!(shorten_pubkey("not-a-key-at-all", 5), "not-a...");
    assert_eq!(shorten_pubkey("ünïcödé-ключ", 3), "ünï...");
    assert_eq!(shorten_pubkey("", 8), "");
}

proptest! {
    #[test]
    fn prop_bech32_roundtrip(
        hrp in "[!-@\\[-~]{1,83}",
        data in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let encoded = bech32::encode(&hrp, &data).expect("encode");
        let (hrp2, data2) = bech32::decode(&encoded).expect("decode");
        prop_assert_eq!(hrp2, hrp);
        prop_assert_eq!(data2, data);
    }

    #[test]
    fn prop_uppercase_decodes_the_same(data in proptest::collection::vec(any::<u8>(), 0..40)) {
        let encoded = bech32::encode("npub", &data).expect("encode");
        let upper = encoded.to_ascii_uppercase();
        prop_assert_eq!(bech32::decode(&upper), bech32::decode(&encoded));
    }

    #[test]
    fn prop_single_char_change_is_detected(
        data in proptest::collection::vec(any::<u8>(), 0..40),
        pos in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let encoded = bech32::encode("npub", &data).expect("encode");
        let data_start = "npub1".len();
        let idx = data_start + pos.index(encoded.len() - data_start);

        let original = encoded.as_bytes()[idx];
        let candidates: Vec<u8> = CHARSET.iter().copied().filter(|&c| c != original).collect();
        let new_char = candidates[replacement.index(candidates.len())];

        let mut mutated = encoded.into_bytes();
        mutated[idx] = new_char;
        let mutated = String::from_utf8(mutated).expect("ascii");
        prop_assert!(bech32::decode(&mutated).is_err());
    }

    #[test]
    fn prop_nsec_roundtrip(secret in any::<[u8; 32]>()) {
        let secret_hex = hex::encode(secret);
        let nsec = encode_nsec(&secret_hex).expect("encode");
        prop_assert_eq!(parse_private_key(&nsec).expect("parse"), secret_hex);
    }
}
