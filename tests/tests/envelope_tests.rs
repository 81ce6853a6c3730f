//! Envelope behaviour against deterministic stand-ins and ML-KEM-768

use pqseal_api::{Error, Kem, Serialize};
use pqseal_hybrid::handshake::verify_kem_handshake;
use pqseal_hybrid::{
    round_trip, EnvelopeBuilder, EnvelopeOpener, MlKem768Aes256Builder, MlKem768Aes256Opener,
    MlKem768Packet, SecurePacket,
};
use pqseal_kem::MlKem768;
use pqseal_symmetric::Aes256Cbc;
use pqseal_tests::{BudgetRng, FaultyKem, ShortSecretKem, ToyBytes, ToyKem, TruncatingCipher};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

type ToyBuilder = EnvelopeBuilder<ToyKem, Aes256Cbc>;
type ToyOpener = EnvelopeOpener<ToyKem, Aes256Cbc>;

const TELEMETRY: &[u8] = b"{\"temp\": 24.5, \"hum\": 60}\0";

#[test]
fn test_toy_round_trip_and_layout() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let keypair = ToyKem::keypair(&mut rng).unwrap();

    let packet: SecurePacket<ToyKem> =
        ToyBuilder::build(&mut rng, TELEMETRY, &keypair.0.0).unwrap();
    assert_eq!(packet.payload_len(), 32);
    assert_eq!(SecurePacket::<ToyKem>::WIRE_LEN, 32 + 16 + 64 + 4);

    let wire = packet.to_bytes();
    let decoded = SecurePacket::<ToyKem>::from_bytes(&wire).unwrap();
    let plaintext = ToyOpener::open(decoded, &ToyKem::secret_key(&keypair)).unwrap();
    assert_eq!(plaintext, TELEMETRY);
}

#[test]
fn test_kem_rejection_surfaces_as_encapsulation_error() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let err = ToyBuilder::build_for::<_, 64>(&mut rng, TELEMETRY, &ToyBytes([0u8; 32]))
        .unwrap_err();
    assert_eq!(
        err,
        Error::Encapsulation {
            algorithm: "toy-xor",
            reason: "all-zero public key",
        }
    );
}

#[test]
fn test_wrong_length_public_key_is_encapsulation_error() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let err = ToyBuilder::build::<_, 64>(&mut rng, TELEMETRY, &[1u8; 31]).unwrap_err();
    assert!(matches!(err, Error::Encapsulation { algorithm: "toy-xor", .. }));
}

#[test]
fn test_iv_draw_failure_is_reported() {
    let mut setup = ChaCha20Rng::seed_from_u64(4);
    let keypair = ToyKem::keypair(&mut setup).unwrap();

    // Enough for the 32-byte encapsulation mask, not for the 16-byte IV.
    let mut rng = BudgetRng::new(4, 32);
    let err = ToyBuilder::build_for::<_, 64>(&mut rng, TELEMETRY, &keypair.0).unwrap_err();
    assert!(matches!(err, Error::RandomGenerationError { .. }));
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_encapsulation_draw_failure_is_reported() {
    let mut setup = ChaCha20Rng::seed_from_u64(5);
    let keypair = ToyKem::keypair(&mut setup).unwrap();

    let mut rng = BudgetRng::new(5, 8);
    let err = ToyBuilder::build_for::<_, 64>(&mut rng, TELEMETRY, &keypair.0).unwrap_err();
    assert!(matches!(err, Error::RandomGenerationError { .. }));
}

#[test]
fn test_secret_length_must_match_cipher_key() {
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let keypair = ShortSecretKem::keypair(&mut rng).unwrap();

    let err = EnvelopeBuilder::<ShortSecretKem, Aes256Cbc>::build_for::<_, 64>(
        &mut rng,
        TELEMETRY,
        &keypair.0,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "EnvelopeBuilder::build",
            expected: 32,
            actual: 16,
        }
    );
}

#[test]
fn test_disagreeing_kem_fails_verification() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    assert_eq!(
        verify_kem_handshake::<FaultyKem, _>(&mut rng).unwrap_err(),
        Error::VerificationFailed {
            context: "verify_kem_handshake",
        }
    );

    // The envelope notices the disagreement as bad padding, or at worst as a
    // mismatch in the self-test comparison.
    let err = round_trip::<FaultyKem, Aes256Cbc, _, 64>(&mut rng, TELEMETRY).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidPadding { .. } | Error::VerificationFailed { .. }
    ));
}

#[test]
fn test_toy_handshake_reports_sizes() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let report = verify_kem_handshake::<ToyKem, _>(&mut rng).unwrap();
    assert_eq!(report.algorithm, "toy-xor");
    assert_eq!(report.ciphertext_len, 32);
    assert_eq!(report.shared_secret_len, 32);
}

#[test]
fn test_capacity_boundary_toy() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let keypair = ToyKem::keypair(&mut rng).unwrap();

    assert!(ToyBuilder::build_for::<_, 64>(&mut rng, &[7u8; 48], &keypair.0).is_ok());
    assert_eq!(
        ToyBuilder::build_for::<_, 64>(&mut rng, &[7u8; 49], &keypair.0).unwrap_err(),
        Error::PayloadTooLarge {
            capacity: 64,
            padded: 64,
        }
    );
    assert!(ToyBuilder::build_for::<_, 16>(&mut rng, &[], &keypair.0).is_ok());
    assert!(ToyBuilder::build_for::<_, 16>(&mut rng, &[7u8; 16], &keypair.0).is_err());
}

#[test]
fn test_short_cipher_output_is_an_error() {
    let mut rng = ChaCha20Rng::seed_from_u64(20);
    let keypair = ToyKem::keypair(&mut rng).unwrap();

    let err = EnvelopeBuilder::<ToyKem, TruncatingCipher>::build_for::<_, 64>(
        &mut rng,
        TELEMETRY,
        &keypair.0,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "EnvelopeBuilder::build",
            expected: 32,
            actual: 16,
        }
    );
}

#[test]
fn test_iv_uniqueness_over_many_packets() {
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let keypair = ToyKem::keypair(&mut rng).unwrap();

    let mut ivs = std::collections::HashSet::new();
    for _ in 0..256 {
        let packet: SecurePacket<ToyKem> =
            ToyBuilder::build_for(&mut rng, TELEMETRY, &keypair.0).unwrap();
        assert!(ivs.insert(*packet.iv()));
    }
}

#[test]
fn test_mlkem_gateway_scenario() {
    // Device seals telemetry for the gateway's key; the gateway opens it.
    let mut gateway_rng = ChaCha20Rng::seed_from_u64(11);
    let gateway = MlKem768::keypair(&mut gateway_rng).unwrap();
    let gateway_pk = gateway.public_key().to_bytes();

    let mut device_rng = ChaCha20Rng::seed_from_u64(12);
    let packet: MlKem768Packet =
        MlKem768Aes256Builder::build(&mut device_rng, TELEMETRY, &gateway_pk).unwrap();
    assert_eq!(packet.payload_len(), 32);

    let line = packet.to_hex();
    let received = MlKem768Packet::from_hex(&line).unwrap();
    let plaintext = MlKem768Aes256Opener::open(received, gateway.secret_key()).unwrap();
    assert_eq!(plaintext.len(), 26);
    let (text, terminator) = plaintext.split_at(25);
    assert_eq!(terminator, b"\0");
    assert_eq!(
        std::str::from_utf8(text).unwrap(),
        r#"{"temp": 24.5, "hum": 60}"#
    );
}

#[test]
fn test_mlkem_self_test_with_system_random() {
    let mut rng = pqseal_api::SystemRandom;
    let report = round_trip::<MlKem768, Aes256Cbc, _, 64>(&mut rng, b"power-on check").unwrap();
    assert_eq!(report.padded_len, 16);
}

#[test]
fn test_stateless_engines_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MlKem768Aes256Builder>();
    assert_send_sync::<MlKem768Aes256Opener>();
    assert_send_sync::<MlKem768Packet>();
    assert_send_sync::<pqseal_api::SystemRandom>();
}

#[test]
fn test_concurrent_builders_share_system_random() {
    let mut rng = ChaCha20Rng::seed_from_u64(13);
    let keypair = ToyKem::keypair(&mut rng).unwrap();
    let pk = keypair.0.clone();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pk = pk.clone();
            std::thread::spawn(move || {
                let mut rng = pqseal_api::SystemRandom;
                let payload = [i as u8; 20];
                let packet: SecurePacket<ToyKem> =
                    ToyBuilder::build_for(&mut rng, &payload, &pk).unwrap();
                (payload, packet)
            })
        })
        .collect();

    for handle in handles {
        let (payload, packet) = handle.join().unwrap();
        let plaintext = ToyOpener::open(packet, &keypair.1).unwrap();
        assert_eq!(plaintext, payload);
    }
}
