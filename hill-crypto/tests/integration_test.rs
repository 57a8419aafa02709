use hill_crypto::preset::alphabets::{LATIN_UPPERCASE, SPANISH_UPPERCASE};
use hill_crypto::ring::matrix_ops::{determinant_mod, identity_matrix, matrix_mul};
use hill_crypto::ring::gcd;
use hill_crypto::{Alphabet, Cipher, HillCipher, HillCryptoError, HillParams, Vigenere};

use rand::SeedableRng;
use rand::rngs::StdRng;

const TEST_SEED: u64 = 12345;

#[test]
fn happy_flow() -> Result<(), HillCryptoError> {
    let hill = HillCipher::try_with(LATIN_UPPERCASE.clone(), 9, None)?;

    let original = "ATTACK AT DAWN";
    let ciphered = hill.cipher(original)?;
    assert_eq!(ciphered.chars().count() % hill.block_size(), 0);

    let deciphered = hill.decipher(&ciphered)?;
    assert_eq!(deciphered.trim_end_matches(hill.alphabet().first()), "ATTACKATDAWN");

    Ok(())
}

#[test]
fn help_fixture_over_latin_alphabet() -> Result<(), HillCryptoError> {
    let hill = HillCipher::try_with(LATIN_UPPERCASE.clone(), 4, Some("HILL"))?;
    assert_eq!(hill.cipher("HELP")?, "DRPA");
    assert_eq!(hill.cipher("HEL")?, "DRZR");
    assert_eq!(hill.decipher("DRZR")?, "HELA");
    Ok(())
}

#[test]
fn caller_supplied_singular_key() -> Result<(), HillCryptoError> {
    let strict = HillCipher::try_with(LATIN_UPPERCASE.clone(), 4, Some("GYBN"));
    assert!(matches!(strict, Err(HillCryptoError::InvalidKey(_))));

    let params = HillParams::try_with(4)?.with_strict_keys(false);
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let lenient = HillCipher::with_params(LATIN_UPPERCASE.clone(), params, Some("GYBN"), &mut rng)?;
    assert_eq!(lenient.cipher("HELP")?, "IHKY");
    assert!(matches!(
        lenient.decipher("IHKY"),
        Err(HillCryptoError::NoInverse(_))
    ));
    Ok(())
}

#[test]
fn generated_keys_over_custom_alphabet() -> Result<(), HillCryptoError> {
    // m = 30 = 2·3·5: determinants must avoid three prime factors
    let alphabet = Alphabet::try_from_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ.,?!")?;
    let params = HillParams::try_with(9)?;
    let mut rng = StdRng::seed_from_u64(TEST_SEED);

    for _ in 0..10 {
        let hill = HillCipher::with_params(alphabet.clone(), params, None, &mut rng)?;
        let ring = alphabet.ring();

        let det = determinant_mod(hill.key_matrix(), ring)?;
        assert_eq!(gcd(det, 30), 1);
        assert_eq!(
            matrix_mul(hill.key_matrix(), &hill.inverse_key_matrix()?, ring)?,
            identity_matrix(3)
        );

        let message = "HELLO, WORLD!";
        let deciphered = hill.decipher(&hill.cipher(message)?)?;
        assert!(deciphered.starts_with("HELLO,WORLD!"));
    }
    Ok(())
}

#[test]
fn params_from_json_drive_construction() -> Result<(), HillCryptoError> {
    let params = HillParams::from_json(r#"{"key_length": 16, "max_key_attempts": 500}"#)?;
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let hill = HillCipher::with_params(SPANISH_UPPERCASE.clone(), params, None, &mut rng)?;
    assert_eq!(hill.block_size(), 4);
    assert_eq!(hill.params().max_key_attempts, 500);
    Ok(())
}

#[test]
fn ciphers_share_one_interface() -> Result<(), HillCryptoError> {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let ciphers: Vec<Box<dyn Cipher>> = vec![
        Box::new(HillCipher::with_params(
            SPANISH_UPPERCASE.clone(),
            HillParams::try_with(4)?,
            None,
            &mut rng,
        )?),
        Box::new(Vigenere::with_rng(SPANISH_UPPERCASE.clone(), None, &mut rng)?),
    ];

    for cipher in &ciphers {
        let ciphered = cipher.cipher("MAÑANA")?;
        assert_eq!(cipher.decipher(&ciphered)?, "MAÑANA");
    }
    Ok(())
}

#[test]
fn cipher_is_usable_across_threads() -> Result<(), HillCryptoError> {
    let hill = HillCipher::try_with(LATIN_UPPERCASE.clone(), 4, Some("HILL"))?;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| hill.cipher("HELP")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "DRPA");
        }
    });
    Ok(())
}
