use super::*;

fn wav_i16(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut buf = Vec::new();
    {
        let mut w = hound::WavWriter::new(Cursor::new(&mut buf), spec).unwrap();
        for &s in samples {
            w.write_sample(s).unwrap();
        }
        w.finalize().unwrap();
    }
    buf
}

#[test]
fn silent_buffer_is_rejected() {
    assert!(matches!(
        normalize_peak(&[0.0; 64]),
        Err(MediaLabError::EmptyOrSilentInput)
    ));
    assert!(matches!(
        normalize_peak(&[]),
        Err(MediaLabError::EmptyOrSilentInput)
    ));
}

#[test]
fn int16_like_peak_normalizes_to_exactly_one() {
    let samples = [0.0, 120.0, -500.0, 250.0, 499.0];
    let out = normalize_peak(&samples).unwrap();
    assert_eq!(peak_amplitude(&out), 1.0);
    assert_eq!(out[2], -1.0);
    assert_eq!(out[3], 0.5);
    assert!(out.iter().all(|s| s.is_finite()));
}

#[test]
fn non_finite_samples_are_rejected() {
    assert!(matches!(
        normalize_peak(&[0.5, f32::NAN]),
        Err(MediaLabError::InvalidArgument(_))
    ));
}

#[test]
fn stereo_downmix_averages_frames() {
    let mono = downmix_to_mono(&[1.0, 0.0, 0.5, 0.5, -1.0, 1.0, 0.25], 2).unwrap();
    assert_eq!(mono, vec![0.5, 0.5, 0.0]);
    assert_eq!(downmix_to_mono(&[0.1, 0.2], 1).unwrap(), vec![0.1, 0.2]);
    assert!(downmix_to_mono(&[0.1], 0).is_err());
}

#[test]
fn wav_stereo_decodes_to_unit_peak_mono() {
    let bytes = wav_i16(2, 8_000, &[500, 500, -250, -250, 100, 300]);
    let audio = decode_and_normalize(&bytes).unwrap();
    assert_eq!(audio.sample_rate, 8_000);
    assert_eq!(audio.samples.len(), 3);
    assert_eq!(audio.samples[0], 1.0);
    assert_eq!(audio.samples[1], -0.5);
    assert!((audio.samples[2] - 0.4).abs() < 1e-6);
    assert!((audio.duration_secs() - 3.0 / 8_000.0).abs() < 1e-12);
}

#[test]
fn wav_of_zeros_is_silent() {
    let bytes = wav_i16(1, 44_100, &[0; 128]);
    assert!(matches!(
        decode_and_normalize(&bytes),
        Err(MediaLabError::EmptyOrSilentInput)
    ));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = decode_and_normalize(b"definitely not audio").unwrap_err();
    assert!(matches!(err, MediaLabError::Decode(_)));
    assert!(err.is_recoverable());
}

#[test]
fn truncated_wav_fails_to_decode() {
    let bytes = wav_i16(1, 8_000, &[1, 2, 3]);
    assert!(matches!(
        decode_audio(&bytes[..20]),
        Err(MediaLabError::Decode(_))
    ));
}
