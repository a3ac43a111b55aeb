//! Encrypt/decrypt CLI command handlers

use std::io::Read;

use secrecy::ExposeSecret;

use crate::cli::commands::{DecryptArgs, EncryptArgs};
use crate::crypto;
use crate::error::Result;

/// Handle `orgbot encrypt`
pub fn handle_encrypt(args: EncryptArgs) -> Result<()> {
    let public_key = crypto::public_key_from_pem_file(&args.public_key)?;
    let plaintext = match args.plaintext {
        Some(plaintext) => plaintext,
        None => read_stdin()?,
    };

    let ciphertext = crypto::encrypt(&public_key, plaintext.trim_end())?;
    println!("{}", ciphertext);
    Ok(())
}

/// Handle `orgbot decrypt`
pub fn handle_decrypt(args: DecryptArgs) -> Result<()> {
    let private_key = crypto::private_key_from_pem_file(&args.private_key)?;
    let ciphertext = match args.ciphertext {
        Some(ciphertext) => ciphertext,
        None => read_stdin()?,
    };

    let plaintext = crypto::decrypt(&private_key, ciphertext.trim())?;
    println!("{}", plaintext.expose_secret());
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
