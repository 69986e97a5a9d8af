//! Round-trips one message through every cipher in the suite.

use rand::rngs::OsRng;
use symcipher::{CipherKind, KeyGenerator, SuiteConfig};

fn main() {
    let payload = b"journey before destination";
    println!("original: {}", String::from_utf8_lossy(payload));

    for kind in CipherKind::ALL {
        let mut gen = KeyGenerator::with_config(OsRng, SuiteConfig::new(kind));
        let generated = gen.generate_cipher().expect("generated key fits the cipher");
        let ct = generated.cipher.encrypt(payload).expect("encrypt");
        let pt = generated.cipher.decrypt(&ct).expect("decrypt");
        assert_eq!(pt, payload, "{kind} failed round-trip");
        println!("[{kind}] ciphertext: {}", hex::encode(&ct));
    }

    println!("example succeeded; every cipher round-trips");
}
