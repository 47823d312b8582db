//! Standalone check that a model directory can transcribe a canonical wave file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use voxscribe::application::services::{DEFAULT_CHUNK_FRAMES, StreamDecoder};
use voxscribe::infrastructure::audio::{ModelLoaderFactory, RecognizerProvider};
use voxscribe::infrastructure::observability::{TracingConfig, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "check-model", about = "Transcribe a mono 16 kHz wave file with one model")]
struct Args {
    /// Model directory, e.g. model/en
    #[arg(long)]
    model: PathBuf,

    /// Mono, 16-bit PCM, 16 kHz wave file
    #[arg(long)]
    audio: PathBuf,

    #[arg(long, default_value_t = DEFAULT_CHUNK_FRAMES)]
    chunk_frames: usize,

    /// Use the canned scaffold recognizer instead of Vosk
    #[arg(long)]
    scaffold: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&TracingConfig::default());

    match run(&args) {
        Ok(transcript) => {
            println!("Transcription: {}", transcript);
            println!("Model is working correctly.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Model failed to transcribe.");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let provider = if args.scaffold {
        RecognizerProvider::Scaffold
    } else {
        RecognizerProvider::Vosk
    };

    tracing::info!(model = %args.model.display(), "Loading model");
    let model = ModelLoaderFactory::create(provider).load(&args.model)?;

    tracing::info!(audio = %args.audio.display(), "Transcribing");
    let transcript = StreamDecoder::new(args.chunk_frames).transcribe(&args.audio, &*model)?;

    Ok(transcript)
}
