//! Properties of the synthesis primitives.

use sfxkit_audio::rng::create_rng;
use sfxkit_audio::{
    concatenate, fade_out, generate_tone, generate_white_noise, sample_count, silence,
};

#[test]
fn test_tone_sample_count_across_inputs() {
    let rates = [8000u32, 11025, 22050, 44100, 48000, 96000];
    let durations = [0u32, 1, 7, 50, 150, 333, 1000];

    for &rate in &rates {
        for &ms in &durations {
            let tone = generate_tone(523.25, ms, -12.0, rate);
            let expected = (rate as u64 * ms as u64 / 1000) as usize;
            assert_eq!(tone.len(), expected, "rate {} ms {}", rate, ms);
        }
    }
}

#[test]
fn test_tone_zero_phase_and_peak() {
    let tone = generate_tone(440.0, 1000, 0.0, 44100);
    assert_eq!(tone.len(), 44100);
    assert_eq!(tone.samples()[0], 0);

    // Quarter period: 44100 / (4 * 440) = 25.06, nearest sample is 25
    let peak = tone.samples()[25] as i32;
    assert!((32767 - peak).abs() < 10, "peak {}", peak);
}

#[test]
fn test_concatenate_keeps_prefix() {
    let a = generate_tone(600.0, 150, -5.0, 44100);
    let b = generate_tone(800.0, 150, -5.0, 44100);
    let joined = concatenate(&[a.clone(), b.clone()]).unwrap();

    assert_eq!(joined.len(), a.len() + b.len());
    assert_eq!(&joined.samples()[..a.len()], a.samples());
    assert_eq!(&joined.samples()[a.len()..], b.samples());
}

#[test]
fn test_full_fade_silences_the_end() {
    let tone = generate_tone(1000.0, 200, 0.0, 44100);
    let faded = fade_out(&tone, 200);

    assert_eq!(faded.len(), tone.len());
    assert_eq!(faded.samples().last(), Some(&0));
    // Second half peaks at most half scale
    let half = faded.len() / 2;
    let tail_peak = faded.samples()[half..]
        .iter()
        .map(|s| s.unsigned_abs())
        .max()
        .unwrap();
    assert!(tail_peak <= 16400, "tail peak {}", tail_peak);
}

#[test]
fn test_partial_fade_leaves_head_untouched() {
    let mut rng = create_rng(11);
    let noise = generate_white_noise(50, -2.0, 44100, &mut rng);
    let faded = fade_out(&noise, 30);

    let head = noise.len() - sample_count(44100, 30);
    assert_eq!(&faded.samples()[..head], &noise.samples()[..head]);
    assert_eq!(faded.samples()[head], noise.samples()[head]);
    assert_eq!(faded.samples().last(), Some(&0));
}

#[test]
fn test_silence_is_zero() {
    for &(ms, rate) in &[(100u32, 44100u32), (80, 11025), (3, 8000)] {
        let s = silence(ms, rate);
        assert_eq!(s.len(), sample_count(rate, ms));
        assert!(s.samples().iter().all(|&v| v == 0));
    }
}

#[test]
fn test_noise_structure() {
    let mut rng = create_rng(2024);
    let noise = generate_white_noise(200, -10.0, 44100, &mut rng);

    assert_eq!(noise.len(), 8820);
    assert!(noise.peak() <= 10362); // 32767 * 10^(-0.5) = 10361.9
    let distinct: std::collections::HashSet<i16> = noise.samples().iter().copied().collect();
    assert!(distinct.len() > 1000);
}
