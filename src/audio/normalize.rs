use std::io::Cursor;

use crate::foundation::error::{MediaLabError, MediaLabResult};

/// Interleaved PCM as it comes out of the codec, scaled to [-1, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedAudio {
    pub sample_rate: u32,
    pub channels: u16,
    pub interleaved: Vec<f32>,
}

/// Mono samples whose absolute peak is exactly 1.0.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NormalizedAudio {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl NormalizedAudio {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}

/// Decodes WAV or MP3 bytes, downmixes to mono and scales to a unit peak.
///
/// Silent or empty clips fail with [`MediaLabError::EmptyOrSilentInput`].
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_and_normalize(bytes: &[u8]) -> MediaLabResult<NormalizedAudio> {
    let decoded = decode_audio(bytes)?;
    let mono = downmix_to_mono(&decoded.interleaved, decoded.channels)?;
    let samples = normalize_peak(&mono)?;
    Ok(NormalizedAudio {
        sample_rate: decoded.sample_rate,
        samples,
    })
}

/// RIFF/WAVE goes through `hound`; everything else is handed to the MP3 decoder.
pub fn decode_audio(bytes: &[u8]) -> MediaLabResult<DecodedAudio> {
    let decoded = if is_wav(bytes) {
        decode_wav(bytes)?
    } else {
        decode_mp3(bytes)?
    };
    if decoded.sample_rate == 0 || decoded.channels == 0 {
        return Err(MediaLabError::decode(format!(
            "stream reports {} Hz with {} channels",
            decoded.sample_rate, decoded.channels
        )));
    }
    tracing::debug!(
        sample_rate = decoded.sample_rate,
        channels = decoded.channels,
        samples = decoded.interleaved.len(),
        "decoded audio"
    );
    Ok(decoded)
}

fn is_wav(bytes: &[u8]) -> bool {
    bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE"
}

fn decode_wav(bytes: &[u8]) -> MediaLabResult<DecodedAudio> {
    let reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| MediaLabError::decode(format!("read wav header: {e}")))?;
    let spec = reader.spec();
    let interleaved = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MediaLabError::decode(format!("read wav samples: {e}")))?,
        hound::SampleFormat::Int => {
            let full_scale = (1u64 << spec.bits_per_sample.saturating_sub(1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| MediaLabError::decode(format!("read wav samples: {e}")))?
        }
    };
    Ok(DecodedAudio {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        interleaved,
    })
}

fn decode_mp3(bytes: &[u8]) -> MediaLabResult<DecodedAudio> {
    let mut decoder = minimp3::Decoder::new(Cursor::new(bytes));
    let mut format: Option<(u32, u16)> = None;
    let mut interleaved = Vec::<f32>::new();
    loop {
        match decoder.next_frame() {
            Ok(frame) => {
                let rate = u32::try_from(frame.sample_rate).map_err(|_| {
                    MediaLabError::decode(format!("invalid mp3 sample rate {}", frame.sample_rate))
                })?;
                let channels = u16::try_from(frame.channels).map_err(|_| {
                    MediaLabError::decode(format!("invalid mp3 channel count {}", frame.channels))
                })?;
                match format {
                    None => format = Some((rate, channels)),
                    Some(f) if f != (rate, channels) => {
                        return Err(MediaLabError::decode(format!(
                            "mp3 stream changes format mid-stream ({} Hz x{} -> {rate} Hz x{channels})",
                            f.0, f.1
                        )));
                    }
                    Some(_) => {}
                }
                interleaved.extend(frame.data.iter().map(|&s| f32::from(s) / 32768.0));
            }
            Err(minimp3::Error::Eof) => break,
            Err(minimp3::Error::SkippedData) => continue,
            Err(e) => return Err(MediaLabError::decode(format!("decode mp3 frame: {e:?}"))),
        }
    }
    let (sample_rate, channels) =
        format.ok_or_else(|| MediaLabError::decode("no mp3 frames found"))?;
    Ok(DecodedAudio {
        sample_rate,
        channels,
        interleaved,
    })
}

/// Averages each frame's channels into one sample. A trailing partial frame is dropped.
pub fn downmix_to_mono(interleaved: &[f32], channels: u16) -> MediaLabResult<Vec<f32>> {
    match channels {
        0 => Err(MediaLabError::invalid_argument("channel count must be > 0")),
        1 => Ok(interleaved.to_vec()),
        n => {
            let n = usize::from(n);
            Ok(interleaved
                .chunks_exact(n)
                .map(|frame| frame.iter().sum::<f32>() / n as f32)
                .collect())
        }
    }
}

/// Largest absolute sample value, or 0 for an empty slice.
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |m, s| m.max(s.abs()))
}

/// Divides every sample by the absolute peak so the loudest sample becomes exactly ±1.0.
pub fn normalize_peak(samples: &[f32]) -> MediaLabResult<Vec<f32>> {
    if samples.iter().any(|s| !s.is_finite()) {
        return Err(MediaLabError::invalid_argument(
            "audio samples must be finite",
        ));
    }
    let peak = peak_amplitude(samples);
    if peak == 0.0 {
        return Err(MediaLabError::EmptyOrSilentInput);
    }
    Ok(samples.iter().map(|s| s / peak).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/audio/normalize.rs"]
mod tests;
