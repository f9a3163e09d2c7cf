use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "medialab", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the PixelLab pass on an image and write the previews as PNGs.
    Pixel(PixelArgs),
    /// Print a practice quiz as JSON.
    Quiz(QuizArgs),
    /// Decode, downmix and normalize an audio clip (WAV or MP3).
    Audio(AudioArgs),
}

#[derive(Parser, Debug)]
struct PixelArgs {
    /// Input image (JPEG, or anything the image crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory for the preview PNGs.
    #[arg(long)]
    out_dir: PathBuf,

    /// Optional lab settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Overrides the settings' brightness factor.
    #[arg(long)]
    brightness: Option<f64>,

    /// Overrides the settings' contrast factor.
    #[arg(long)]
    contrast: Option<f64>,
}

#[derive(Parser, Debug)]
struct QuizArgs {
    /// Seed for a reproducible quiz; a fresh one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct AudioArgs {
    /// Input clip.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Resample (nearest) to this rate before writing.
    #[arg(long)]
    target_rate: Option<u32>,

    /// Quantize to this many bits per sample before writing.
    #[arg(long, default_value_t = 16)]
    bits: u32,

    /// Write the processed mono clip as 16-bit WAV.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Pixel(args) => cmd_pixel(args),
        Command::Quiz(args) => cmd_quiz(args),
        Command::Audio(args) => cmd_audio(args),
    }
}

fn cmd_pixel(args: PixelArgs) -> anyhow::Result<()> {
    let mut settings = match &args.settings {
        Some(path) => medialab::LabSettings::load(path)?,
        None => medialab::LabSettings::default(),
    };
    if let Some(b) = args.brightness {
        settings.brightness = b;
    }
    if let Some(c) = args.contrast {
        settings.contrast = c;
    }

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;
    let image = medialab::DecodedImage::decode(&bytes)?;
    let report = medialab::run_pixel_lab(&image, Some(bytes.len() as u64), &settings)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    save_png(&report.adjusted, &args.out_dir.join("adjusted.png"))?;
    for (ch, img) in medialab::Channel::ALL.iter().zip(&report.channels) {
        let name = format!("channel_{}.png", ch.label().to_ascii_lowercase());
        save_png(img, &args.out_dir.join(name))?;
    }
    for p in &report.resolutions {
        let name = match p.ppi {
            Some(ppi) => format!("ppi_{ppi}.png"),
            None => format!("grid_{}x{}.png", p.grid_width, p.grid_height),
        };
        save_png(&p.image, &args.out_dir.join(name))?;
    }
    for d in &report.depths {
        let name = format!("depth_{}bit.png", d.total_bits);
        save_png(&d.image, &args.out_dir.join(name))?;
    }

    let summary = serde_json::json!({
        "width": report.width,
        "height": report.height,
        "total_pixels": report.total_pixels,
        "resolutions": report.resolutions.iter().map(|p| serde_json::json!({
            "ppi": p.ppi,
            "grid": [p.grid_width, p.grid_height],
        })).collect::<Vec<_>>(),
        "depths": report.depths.iter().map(|d| serde_json::json!({
            "channel_bits": d.spec.channel_bits,
            "total_bits": d.total_bits,
        })).collect::<Vec<_>>(),
        "upload_bytes": report.upload_bytes,
        "format_table": report.format_table,
        "formats": report.formats,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    eprintln!("wrote previews to {}", args.out_dir.display());
    Ok(())
}

fn save_png(image: &medialab::DecodedImage, path: &Path) -> anyhow::Result<()> {
    image
        .as_rgb_image()
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_quiz(args: QuizArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let quiz = medialab::generate_quiz_seeded(seed)?;
    let items = quiz
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::json!({
                "number": i + 1,
                "prompt": item.prompt(),
                "explanation": item.explanation(),
                "item": item,
            })
        })
        .collect::<Vec<_>>();
    let out = serde_json::json!({ "seed": seed, "questions": items });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_audio(args: AudioArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read audio '{}'", args.in_path.display()))?;
    let audio = match medialab::decode_and_normalize(&bytes) {
        Ok(a) => a,
        Err(medialab::MediaLabError::EmptyOrSilentInput) => {
            eprintln!("'{}' is silent; nothing to normalize", args.in_path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let rate = args.target_rate.unwrap_or(audio.sample_rate);
    let resampled = medialab::reduce_sample_rate(&audio.samples, audio.sample_rate, rate)?;
    let processed = medialab::quantize_samples(&resampled, args.bits)?;
    let secs = audio.duration_secs();

    let out = serde_json::json!({
        "sample_rate": audio.sample_rate,
        "samples": audio.samples.len(),
        "duration_secs": secs,
        "peak": medialab::peak_amplitude(&audio.samples),
        "pcm_kb_16bit_mono": medialab::estimate_pcm_size_kb(audio.sample_rate, 16, 1, secs)?,
        "processed": {
            "sample_rate": rate,
            "bits": args.bits,
            "samples": processed.len(),
            "pcm_kb": medialab::estimate_pcm_size_kb(rate, args.bits, 1, secs)?,
        },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    if let Some(path) = &args.out {
        write_wav_i16(&processed, rate, path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn write_wav_i16(samples: &[f32], sample_rate: u32, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut w = hound::WavWriter::create(path, spec)
        .with_context(|| format!("create wav '{}'", path.display()))?;
    for &s in samples {
        w.write_sample((s * 32767.0).round().clamp(-32768.0, 32767.0) as i16)?;
    }
    w.finalize()
        .with_context(|| format!("finalize wav '{}'", path.display()))
}
