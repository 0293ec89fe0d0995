//! Named-clip mixer.
//!
//! Minimal clip playback model behind the `ClipSink` seam: one active clip,
//! at most one outgoing clip fading down, a registry of known clip lengths.
//! Requests for clips that were never registered are silently dropped, which
//! matches how the scene behaves when a model asset is missing.

use super::reaction::ClipSink;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug)]
pub struct Clip {
    pub length_sec: f32,
}

#[derive(Clone, Debug)]
struct Playing {
    name: String,
    time: f32,
    looping: bool,
}

#[derive(Default)]
pub struct ClipMixer {
    clips: FnvHashMap<String, Clip>,
    active: Option<Playing>,
    // Outgoing clip while a cross-fade is in flight
    previous: Option<Playing>,
    fade_total: f32,
    fade_left: f32,
}

impl ClipMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, length_sec: f32) {
        self.clips.insert(name.to_string(), Clip { length_sec });
    }

    pub fn active_clip(&self) -> Option<&str> {
        self.active.as_ref().map(|p| p.name.as_str())
    }

    /// Playback position of the active clip in seconds.
    pub fn active_time(&self) -> f32 {
        self.active.as_ref().map(|p| p.time).unwrap_or(0.0)
    }

    /// Normalized playback position of the active clip in [0, 1]; looping
    /// clips wrap before reaching 1, one-shots park there.
    pub fn active_phase(&self) -> f32 {
        let Some(p) = &self.active else { return 0.0 };
        let len = self.clips.get(&p.name).map(|c| c.length_sec).unwrap_or(1.0);
        if len > 0.0 {
            (p.time / len).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Blend weight of a named clip in [0, 1]: the incoming clip ramps up
    /// over the cross-fade while the outgoing one ramps down.
    pub fn weight_of(&self, name: &str) -> f32 {
        let fading = self.fade_total > 0.0 && self.fade_left > 0.0;
        if let Some(p) = &self.active {
            if p.name == name {
                return if fading {
                    1.0 - self.fade_left / self.fade_total
                } else {
                    1.0
                };
            }
        }
        if fading {
            if let Some(p) = &self.previous {
                if p.name == name {
                    return self.fade_left / self.fade_total;
                }
            }
        }
        0.0
    }

    /// Advance playback heads and the cross-fade by `dt_sec`. Looping clips
    /// wrap at their length; one-shots clamp at the final pose.
    pub fn advance(&mut self, dt_sec: f32) {
        if dt_sec <= 0.0 {
            return;
        }
        if self.fade_left > 0.0 {
            self.fade_left -= dt_sec;
            if self.fade_left <= 0.0 {
                self.fade_left = 0.0;
                self.fade_total = 0.0;
                self.previous = None;
            }
        }
        let clips = &self.clips;
        for playing in self.active.iter_mut().chain(self.previous.iter_mut()) {
            let Some(clip) = clips.get(&playing.name) else {
                continue;
            };
            playing.time += dt_sec;
            if playing.looping {
                if clip.length_sec > 0.0 {
                    playing.time %= clip.length_sec;
                }
            } else {
                playing.time = playing.time.min(clip.length_sec);
            }
        }
    }
}

impl ClipSink for ClipMixer {
    fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    fn play(&mut self, name: &str, fade_sec: f32, looping: bool) {
        if !self.has_clip(name) {
            log::warn!("[anim] unknown clip '{name}', ignoring");
            return;
        }
        if fade_sec > 0.0 {
            self.previous = self.active.take();
            self.fade_total = fade_sec;
            self.fade_left = fade_sec;
        } else {
            // Immediate switch: no residual pose from the outgoing clip
            self.previous = None;
            self.fade_total = 0.0;
            self.fade_left = 0.0;
        }
        self.active = Some(Playing {
            name: name.to_string(),
            time: 0.0,
            looping,
        });
    }
}
