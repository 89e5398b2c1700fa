mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::io::{self, BufRead, Read, Write};

use log::debug;
use thiserror::Error;

/// Longest accepted block line, in bytes.
const BLOCK_LINE_MAX: u64 = 16;
/// Longest accepted key line, in bytes.
const KEY_LINE_MAX: u64 = 32;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input line longer than {max} bytes")]
    LineTooLong { max: u64 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Simon(#[from] simonp::Error),
}

fn main() {
    env_logger::init();

    if let Err(e) = simon_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn simon_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(block) => {
            let ciphertext = simonp::encrypt(&block.input, &block.key)?;
            println!("{ciphertext}");
        }
        Commands::Decrypt(block) => {
            let plaintext = simonp::decrypt(&block.input, &block.key)?;
            println!("{plaintext}");
        }
        Commands::GenKey => {
            println!("{}", simonp::HexKey::random()?);
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            interactive(&mut input, &mut out)?;
        }
    }
    Ok(())
}

/// Prompts for a plaintext and key on `input`, then writes the ciphertext and the
/// decrypted plaintext to `out`.
fn interactive<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), CliError> {
    writeln!(
        out,
        "Enter the plaintext (64 bits) in hexadecimal format\nUse lower case characters and enter new line at the end"
    )?;
    out.flush()?;
    let plaintext = read_bounded_line(input, BLOCK_LINE_MAX)?;

    writeln!(
        out,
        "Enter the key (128 bits) in hexadecimal format\nUse lower case characters and enter new line at the end"
    )?;
    out.flush()?;
    let key = read_bounded_line(input, KEY_LINE_MAX)?;
    debug!("read plaintext ({} chars) and key ({} chars)", plaintext.len(), key.len());

    let ciphertext = simonp::encrypt(&plaintext, &key)?;
    writeln!(out, "The ciphertext is: {ciphertext}")?;

    let recovered = simonp::decrypt(&ciphertext, &key)?;
    writeln!(out, "The decrypted plaintext is: {recovered}")?;
    Ok(())
}

/// Reads one line of at most `max` bytes (excluding the line ending) without ever
/// buffering more than `max + 2` bytes. The trailing `\n` or `\r\n` is stripped.
fn read_bounded_line<R: BufRead>(input: &mut R, max: u64) -> Result<String, CliError> {
    let mut line = String::new();
    // room for the content plus "\r\n"
    let read = Read::take(&mut *input, max + 2).read_line(&mut line)?;
    if read == 0 {
        return Err(CliError::UnexpectedEof);
    }

    let terminated = line.ends_with('\n');
    if terminated {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    // an unterminated read that hit the limit is always longer than `max`
    if line.len() as u64 > max {
        return Err(CliError::LineTooLong { max });
    }
    Ok(line)
}
