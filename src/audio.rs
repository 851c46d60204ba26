//! Audio cues using Web Audio API
//!
//! Short procedural tones for answers and game endings - no external files.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::{GameEvent, Verdict};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Right answer
    Correct,
    /// Wrong answer
    Wrong,
    /// A heart was lost
    LifeLost,
    /// Moved to the next level
    LevelUp,
    /// Finished every level
    Victory,
    /// Ran out of hearts
    GameOver,
}

impl SoundEffect {
    /// Cue for a session event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Answered { verdict: Verdict::Correct, .. } => Some(SoundEffect::Correct),
            GameEvent::Answered { verdict: Verdict::Wrong, .. } => Some(SoundEffect::Wrong),
            GameEvent::LifeLost { .. } => Some(SoundEffect::LifeLost),
            GameEvent::Advanced { .. } => Some(SoundEffect::LevelUp),
            GameEvent::Finished { out_of_lives: true, .. } => Some(SoundEffect::GameOver),
            GameEvent::Finished { out_of_lives: false, .. } => Some(SoundEffect::Victory),
            GameEvent::Reset => None,
        }
    }
}

/// Audio manager for a game page
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Play the cues for a batch of events
    pub fn play_events(&self, events: &[GameEvent]) {
        // LifeLost and Wrong arrive together; one cue is enough
        let mut played_wrong = false;
        for event in events {
            match SoundEffect::for_event(event) {
                Some(SoundEffect::Wrong | SoundEffect::LifeLost) if played_wrong => {}
                Some(effect) => {
                    played_wrong |= matches!(effect, SoundEffect::Wrong | SoundEffect::LifeLost);
                    self.play(effect);
                }
                None => {}
            }
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Browsers start the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Correct => self.play_chime(ctx, vol, &[660.0, 880.0]),
            SoundEffect::Wrong => self.play_buzz(ctx, vol),
            SoundEffect::LifeLost => self.play_drop(ctx, vol),
            SoundEffect::LevelUp => self.play_chime(ctx, vol * 0.6, &[523.0, 659.0, 784.0]),
            SoundEffect::Victory => {
                self.play_chime(ctx, vol, &[523.0, 659.0, 784.0, 1047.0])
            }
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Rising arpeggio, one note every 90ms
    fn play_chime(&self, ctx: &AudioContext, vol: f32, notes: &[f32]) {
        let t = ctx.current_time();
        for (i, freq) in notes.iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) else {
                return;
            };
            let start = t + i as f64 * 0.09;
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().set_value_at_time(vol * 0.35, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.25)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.3).ok();
        }
    }

    /// Soft low buzz
    fn play_buzz(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.25)
            .ok();
        osc.frequency().set_value_at_time(180.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(120.0, t + 0.25)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.3).ok();
    }

    /// Falling blip for a lost heart
    fn play_drop(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 440.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.3)
            .ok();
        osc.frequency().set_value_at_time(440.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(220.0, t + 0.3)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.35).ok();
    }

    /// Gentle descending phrase (not scary)
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();
        for (i, freq) in [392.0_f32, 330.0, 262.0].iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) else {
                return;
            };
            let start = t + i as f64 * 0.18;
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().set_value_at_time(vol * 0.3, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.3)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.35).ok();
        }
    }
}
