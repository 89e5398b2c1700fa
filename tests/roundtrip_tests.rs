use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simonp::{Error, HexBlock, HexKey, decode_hex, decrypt, encode_hex, encrypt};

const SAMPLES: usize = 256;

fn random_block(rng: &mut StdRng) -> HexBlock {
    encode_hex(rng.random::<u64>())
}

fn random_key(rng: &mut StdRng) -> HexKey {
    HexKey::from_bytes(&rng.random::<[u8; 16]>())
}

#[test]
fn decrypt_inverts_encrypt() -> simonp::Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5105);
    for _ in 0..SAMPLES {
        let pt = random_block(&mut rng);
        let key = random_key(&mut rng);

        let ct = encrypt(pt.as_str(), key.as_str())?;
        assert_eq!(ct.len(), 16);
        assert_eq!(decrypt(&ct, key.as_str())?, pt.as_str(), "key {key}");
    }
    Ok(())
}

#[test]
fn encryption_is_deterministic() -> simonp::Result<()> {
    let key = "00112233445566778899aabbccddeeff";
    let first = encrypt("0123456789abcdef", key)?;
    for _ in 0..8 {
        assert_eq!(encrypt("0123456789abcdef", key)?, first);
    }
    assert_eq!(decrypt(&first, key)?, "0123456789abcdef");
    Ok(())
}

#[test]
fn plaintext_bit_flip_avalanche() -> simonp::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut total = 0u32;
    for _ in 0..SAMPLES {
        let pt = rng.random::<u64>();
        let key = random_key(&mut rng);
        let bit = rng.random_range(0..64u32);

        let a = decode_hex(&encrypt(encode_hex(pt).as_str(), key.as_str())?)?;
        let b = decode_hex(&encrypt(encode_hex(pt ^ (1u64 << bit)).as_str(), key.as_str())?)?;
        total += (a ^ b).count_ones();
    }
    let mean = total as f64 / SAMPLES as f64;
    assert!((28.0..36.0).contains(&mean), "mean flipped bits {mean}");
    Ok(())
}

#[test]
fn key_bit_flip_avalanche() -> simonp::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let mut total = 0u32;
    for _ in 0..SAMPLES {
        let pt = random_block(&mut rng);
        let key_bytes = rng.random::<[u8; 16]>();
        let bit = rng.random_range(0..128usize);
        let mut flipped = key_bytes;
        flipped[bit / 8] ^= 1u8 << (bit % 8);

        let a = decode_hex(&encrypt(pt.as_str(), HexKey::from_bytes(&key_bytes).as_str())?)?;
        let b = decode_hex(&encrypt(pt.as_str(), HexKey::from_bytes(&flipped).as_str())?)?;
        total += (a ^ b).count_ones();
    }
    let mean = total as f64 / SAMPLES as f64;
    assert!((28.0..36.0).contains(&mean), "mean flipped bits {mean}");
    Ok(())
}

#[test]
fn codec_round_trip() -> simonp::Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let v = rng.random::<u64>();
        assert_eq!(decode_hex(encode_hex(v).as_str())?, v);
    }
    Ok(())
}

#[test]
fn invalid_inputs_are_rejected() {
    let key = "0001020308090a0b1011121318191a1b";
    let block = "756e64206c696b65";
    let bad_blocks = ["", "756e64206c696b6", "756e64206c696b650", "756e64206c696b6z", "0x6e64206c696b65"];
    let bad_keys = ["", "0001020308090a0b", "0001020308090a0b1011121318191a1b00", "0001020308090a0b1011121318191a1 "];

    for bad in bad_blocks {
        assert!(matches!(encrypt(bad, key), Err(Error::InvalidInput { .. })), "{bad:?}");
        assert!(matches!(decrypt(bad, key), Err(Error::InvalidInput { .. })), "{bad:?}");
    }
    for bad in bad_keys {
        assert!(matches!(encrypt(block, bad), Err(Error::InvalidInput { .. })), "{bad:?}");
        assert!(matches!(decrypt(block, bad), Err(Error::InvalidInput { .. })), "{bad:?}");
    }
}
