//! End-to-end CLI tests
//!
//! Exercises the operator workflow through the real binary: key files on
//! disk, encrypt to base64, decrypt back. No network is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tempfile::TempDir;

struct KeyFiles {
    _dir: TempDir,
    public: std::path::PathBuf,
    private: std::path::PathBuf,
}

fn write_key_pair() -> KeyFiles {
    let mut rng = rand::thread_rng();
    let private = RsaPrivateKey::new(&mut rng, 2048).expect("key generation");
    let public = RsaPublicKey::from(&private);

    let dir = TempDir::new().expect("temp dir");
    let public_path = dir.path().join("public.pem");
    let private_path = dir.path().join("private.pem");

    std::fs::write(
        &public_path,
        public.to_public_key_pem(LineEnding::LF).expect("public pem"),
    )
    .expect("write public key");
    std::fs::write(
        &private_path,
        private
            .to_pkcs8_pem(LineEnding::LF)
            .expect("private pem")
            .as_bytes(),
    )
    .expect("write private key");

    KeyFiles {
        _dir: dir,
        public: public_path,
        private: private_path,
    }
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let keys = write_key_pair();

    let output = Command::cargo_bin("orgbot")
        .unwrap()
        .args(["encrypt", "--public-key"])
        .arg(&keys.public)
        .arg("ghp_round_trip_token")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let ciphertext = String::from_utf8(output).unwrap();

    Command::cargo_bin("orgbot")
        .unwrap()
        .args(["decrypt", "--private-key"])
        .arg(&keys.private)
        .arg(ciphertext.trim())
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_round_trip_token"));
}

#[test]
fn encrypt_reads_plaintext_from_stdin() {
    let keys = write_key_pair();

    Command::cargo_bin("orgbot")
        .unwrap()
        .args(["encrypt", "--public-key"])
        .arg(&keys.public)
        .write_stdin("secret-from-stdin\n")
        .assert()
        .success();
}

#[test]
fn decrypt_fails_cleanly_on_garbage() {
    let keys = write_key_pair();

    Command::cargo_bin("orgbot")
        .unwrap()
        .args(["decrypt", "--private-key"])
        .arg(&keys.private)
        .arg("!!! not base64 !!!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot decrypt"));
}

#[test]
fn deliver_ignores_unhandled_event_types() {
    let keys = write_key_pair();
    let dir = TempDir::new().unwrap();
    let payload = dir.path().join("payload.json");
    std::fs::write(&payload, "{}").unwrap();

    Command::cargo_bin("orgbot")
        .unwrap()
        .args(["deliver", "--event", "status"])
        .arg("--payload")
        .arg(&payload)
        .arg("--private-key")
        .arg(&keys.private)
        .args(["--token", "dummy"])
        .assert()
        .success();
}
