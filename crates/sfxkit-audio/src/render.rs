//! Rendering recipes and the built-in presets.
//!
//! Every segment renders to its own buffer at the recipe's sample rate,
//! gets its optional fade-out, and the parts are concatenated in order.
//! Noise segment `i` draws from `create_segment_rng(seed, i)`.

use sfxkit_spec::{NoiseSpec, Preset, Recipe, Segment, ToneSpec};

use crate::buffer::{concatenate, fade_out, silence, SampleBuffer};
use crate::error::{AudioError, AudioResult};
use crate::rng::create_segment_rng;
use crate::synthesis::Synthesizer;

/// Renders a single segment at `sample_rate`.
///
/// `segment_index` selects the noise stream; tones and silence ignore it.
pub fn render_segment(
    segment: &Segment,
    sample_rate: u32,
    seed: u32,
    segment_index: u32,
) -> SampleBuffer {
    let mut rng = create_segment_rng(seed, segment_index);

    let raw = match *segment {
        Segment::Tone {
            frequency,
            duration_ms,
            volume_db,
            ..
        } => ToneSpec {
            frequency,
            duration_ms,
            volume_db,
            sample_rate,
        }
        .synthesize(&mut rng),
        Segment::Noise {
            duration_ms,
            volume_db,
            ..
        } => NoiseSpec {
            duration_ms,
            volume_db,
            sample_rate,
        }
        .synthesize(&mut rng),
        Segment::Silence { duration_ms } => silence(duration_ms, sample_rate),
    };

    match segment.fade_out_ms() {
        Some(fade_ms) => fade_out(&raw, fade_ms),
        None => raw,
    }
}

/// Validates and renders a recipe.
///
/// Validation warnings are ignored here; callers that want to surface them
/// run [`Recipe::validate`] themselves.
pub fn render_recipe(recipe: &Recipe, seed: u32) -> AudioResult<SampleBuffer> {
    let validation = recipe.validate();
    if let Some(first) = validation.errors.first() {
        return Err(AudioError::InvalidRecipe {
            name: recipe.name.clone(),
            message: first.to_string(),
        });
    }

    let parts: Vec<SampleBuffer> = recipe
        .segments
        .iter()
        .enumerate()
        .map(|(i, segment)| render_segment(segment, recipe.sample_rate, seed, i as u32))
        .collect();

    concatenate(&parts)
}

/// Renders a built-in preset at `sample_rate`.
pub fn render_preset(preset: Preset, sample_rate: u32, seed: u32) -> AudioResult<SampleBuffer> {
    render_recipe(&preset.recipe().with_sample_rate(sample_rate), seed)
}

/// 800 Hz beep, 300 ms.
pub fn create_simple_beep(sample_rate: u32) -> AudioResult<SampleBuffer> {
    render_preset(Preset::Beep, sample_rate, 0)
}

/// Two 50 ms noise knocks with 30 ms fade-outs, 100 ms apart.
pub fn create_door_knock(sample_rate: u32, seed: u32) -> AudioResult<SampleBuffer> {
    render_preset(Preset::DoorKnock, sample_rate, seed)
}

/// Rising 600/800/1000 Hz chime, 500 ms.
pub fn create_success_sound(sample_rate: u32) -> AudioResult<SampleBuffer> {
    render_preset(Preset::Success, sample_rate, 0)
}

/// Falling 600/400/200 Hz chime, 500 ms.
pub fn create_fail_sound(sample_rate: u32) -> AudioResult<SampleBuffer> {
    render_preset(Preset::Fail, sample_rate, 0)
}

/// 880 Hz then 660 Hz, 400 ms.
pub fn create_pinpon_sound(sample_rate: u32) -> AudioResult<SampleBuffer> {
    render_preset(Preset::Pinpon, sample_rate, 0)
}

/// 200 Hz buzz, 80 ms gap, 160 Hz buzz; 580 ms.
pub fn create_bubuu_sound(sample_rate: u32) -> AudioResult<SampleBuffer> {
    render_preset(Preset::Bubuu, sample_rate, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::sample_count;
    use crate::synthesis::generate_tone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_tone_segment_matches_primitive() {
        let segment = Segment::tone(800.0, 300, -5.0);
        let rendered = render_segment(&segment, 44100, 0, 0);
        assert_eq!(rendered, generate_tone(800.0, 300, -5.0, 44100));
    }

    #[test]
    fn test_render_segment_applies_fade() {
        let segment = Segment::tone(1000.0, 100, 0.0).with_fade_out(100);
        let rendered = render_segment(&segment, 44100, 0, 0);
        assert_eq!(rendered.samples().last(), Some(&0));
    }

    #[test]
    fn test_render_silence_segment() {
        let rendered = render_segment(&Segment::silence(80), 44100, 5, 1);
        assert_eq!(rendered.len(), 3528);
        assert_eq!(rendered.peak(), 0);
    }

    #[test]
    fn test_render_recipe_rejects_invalid() {
        let recipe = Recipe::new("broken", "broken");
        match render_recipe(&recipe, 0) {
            Err(AudioError::InvalidRecipe { name, message }) => {
                assert_eq!(name, "broken");
                assert!(message.contains("E004"));
            }
            other => panic!("expected invalid recipe, got {:?}", other),
        }
    }

    #[test]
    fn test_beep_is_a_single_tone() {
        let beep = create_simple_beep(44100).unwrap();
        assert_eq!(beep, generate_tone(800.0, 300, -5.0, 44100));
    }

    #[test]
    fn test_bubuu_gap_is_silent() {
        let bubuu = create_bubuu_sound(44100).unwrap();
        let start = sample_count(44100, 200);
        let gap = &bubuu.samples()[start..start + sample_count(44100, 80)];
        assert!(gap.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_door_knock_seeded() {
        let a = create_door_knock(44100, 42).unwrap();
        let b = create_door_knock(44100, 42).unwrap();
        let c = create_door_knock(44100, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_door_knock_knocks_differ() {
        let knock = create_door_knock(44100, 42).unwrap();
        let len = sample_count(44100, 50);
        let gap = sample_count(44100, 100);
        let first = &knock.samples()[..len];
        let second = &knock.samples()[len + gap..];
        assert_eq!(second.len(), len);
        assert_ne!(first, second);
        assert_eq!(first.last(), Some(&0));
        assert_eq!(second.last(), Some(&0));
    }

    #[test]
    fn test_preset_rejects_unsupported_rate() {
        assert!(create_pinpon_sound(0).is_err());
    }
}
