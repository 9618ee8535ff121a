// hanmap CLI Tool
// Command-line interface for Mandarin transcription conversion

use clap::{Parser, ValueEnum};
use hanmap::{Container, HanMapper, SegmentOptions};
use std::path::PathBuf;

/// Output system
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Accented Pinyin
    Pinyin,
    /// Numbered Pinyin
    Numbered,
    Zhuyin,
    Ipa,
}

/// hanmap - Convert Mandarin between Hanzi, Pinyin, Zhuyin and IPA
#[derive(Parser, Debug)]
#[command(name = "hanmap")]
#[command(about = "Convert and identify Mandarin transcriptions", long_about = None)]
#[command(version)]
struct Args {
    /// Text to convert (a transcription, or Hanzi with --hanzi)
    #[arg(value_name = "TEXT")]
    text: String,

    /// Output system
    #[arg(short, long, value_enum, default_value = "pinyin")]
    to: Target,

    /// Treat the input as Hanzi
    #[arg(long)]
    hanzi: bool,

    /// Show every reading of ambiguous words and characters
    #[arg(short, long)]
    all_readings: bool,

    /// Word delimiter in Hanzi input
    #[arg(short, long, default_value = " ")]
    delimiter: char,

    /// Two characters enclosing a reading list
    #[arg(short, long, default_value = "[]")]
    container: String,

    /// Only print the identified transcription system
    #[arg(short, long)]
    identify: bool,

    /// Directory with replacement data files
    #[arg(long, env = "HANMAP_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mapper = match &args.data_dir {
        Some(dir) => HanMapper::from_dir(dir)?,
        None => HanMapper::new()?,
    };

    if args.verbose {
        eprintln!(
            "Tables loaded: {} syllables, {} words, {} characters",
            mapper.table().len(),
            mapper.words().len(),
            mapper.characters().len()
        );
    }

    if args.identify {
        println!("{}", mapper.identify_transcription(&args.text));
        return Ok(());
    }

    let output = if args.hanzi {
        let container = Container::parse(&args.container)
            .ok_or_else(|| format!("container must be two characters, got '{}'", args.container))?;
        let options = SegmentOptions::default()
            .with_delimiter(args.delimiter)
            .with_all_readings(args.all_readings)
            .with_container(container);
        convert_hanzi(&mapper, &args.text, args.to, &options)?
    } else {
        if args.verbose {
            eprintln!("Identified as {}", mapper.identify_transcription(&args.text));
        }
        convert_transcription(&mapper, &args.text, args.to)?
    };

    println!("{}", output);
    Ok(())
}

fn convert_hanzi(
    mapper: &HanMapper,
    text: &str,
    to: Target,
    options: &SegmentOptions,
) -> hanmap::types::Result<String> {
    match to {
        Target::Pinyin => mapper.hanzi_to_pinyin(text, options),
        Target::Numbered => mapper.hanzi_to_pinyin(text, &options.with_accented(false)),
        Target::Zhuyin => mapper.hanzi_to_zhuyin(text, options),
        Target::Ipa => mapper.hanzi_to_ipa(text, options),
    }
}

fn convert_transcription(mapper: &HanMapper, text: &str, to: Target) -> hanmap::types::Result<String> {
    match to {
        Target::Pinyin => mapper.to_pinyin(text, true),
        Target::Numbered => mapper.to_pinyin(text, false),
        Target::Zhuyin => mapper.to_zhuyin(text),
        Target::Ipa => mapper.to_ipa(text),
    }
}
