//! Encrypts a short message and checks the first block against FIPS-197.

use rijndael_core::{encrypt_block, expand_key, Aes128Key, Engine};

fn main() {
    let key = Aes128Key::from([0u8; 16]);
    let engine = Engine::new().with_observer(|key: &Aes128Key| {
        println!("key: {}", key.to_hex());
    });

    // A single aligned block still gains a PKCS#7 padding block.
    let ciphertext = engine.encrypt_bytes(&[0u8; 16], &key);
    let expected_first = encrypt_block(&[0u8; 16], &expand_key(&key));
    assert_eq!(&ciphertext[..32], hex::encode(expected_first));
    assert_eq!(&ciphertext[..32], "66e94bd4ef8a2c3b884cfa59ca342b2e");

    println!("ciphertext: {ciphertext}");
    println!("example succeeded; first block matches the FIPS-197 vector");
}
