use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use morsewave::{Direction, Mode, SynthOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into Morse code
    Encode {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Decode Morse code into text
    Decode {
        #[arg(value_name = "MORSE")]
        morse: String,
    },
    /// Auto-detect the input kind and translate it
    Translate {
        #[arg(value_name = "INPUT")]
        input: String,
    },
    /// Render the input as a WAV file
    Wav {
        #[arg(value_name = "INPUT")]
        input: String,
        /// Output path for the WAV file
        #[arg(short, long, value_name = "FILE", default_value = "morse.wav")]
        output: PathBuf,
        /// Speed in words per minute
        #[arg(long, default_value_t = 20.0)]
        wpm: f32,
        /// Tone frequency in Hz
        #[arg(long, default_value_t = 600.0)]
        frequency: f32,
        /// Output sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,
    },
}

fn main() -> Result<()> {
    // Set up logging. Use `RUST_LOG=info` or `RUST_LOG=debug` to see output.
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { text } => println!("{}", morsewave::encode(&text)),
        Command::Decode { morse } => println!("{}", morsewave::decode(&morse)),
        Command::Translate { input } => {
            let direction = Mode::Auto.resolve(&input);
            log::info!("Detected input as {:?}", direction);
            println!("{}", morsewave::translate(&input, direction));
        }
        Command::Wav {
            input,
            output,
            wpm,
            frequency,
            sample_rate,
        } => {
            // Plain text is encoded first; Morse input passes straight through.
            let morse = match Mode::Auto.resolve(&input) {
                Direction::Text => morsewave::encode(&input),
                Direction::Morse => input,
            };

            let options = SynthOptions {
                wpm,
                frequency,
                sample_rate,
            };
            match morsewave::synthesize_wav(&morse, &options)? {
                Some(bytes) => {
                    fs::write(&output, &bytes)?;
                    log::info!("Wrote {} bytes to {:?}", bytes.len(), output);
                    println!("{}", output.display());
                }
                None => println!("Nothing to render"),
            }
        }
    }

    Ok(())
}
