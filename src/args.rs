use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt one block, printing the ciphertext
    Encrypt(BlockArgs),

    /// Decrypt one block, printing the plaintext
    Decrypt(BlockArgs),

    /// Print a random 128-bit key as 32 hex characters
    GenKey,

    /// Prompt for a plaintext and key, then print the ciphertext and the decrypted plaintext
    Interactive,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct BlockArgs {
    /// Input block, 16 lowercase hex characters.
    #[arg(short = 'i', long = "input", value_name = "HEX")]
    pub input: String,

    /// Key, 32 lowercase hex characters.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,
}
