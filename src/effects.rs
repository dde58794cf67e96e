//! Completion Effects
//!
//! Audio cue played when the checklist is completed.

use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Play the celebration sound from the start. Fire-and-forget.
///
/// A rejected `play()` (autoplay policy, missing asset) is logged and dropped.
pub fn play_celebration_sound(audio: Option<HtmlAudioElement>) {
    let Some(audio) = audio else {
        log::warn!("[Effects] Celebration audio element not mounted");
        return;
    };
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!(
                    "[Effects] Audio playback blocked. Interact with the page first. ({:?})",
                    e
                );
            }
        }),
        Err(e) => log::warn!("[Effects] Audio playback failed: {:?}", e),
    }
}
