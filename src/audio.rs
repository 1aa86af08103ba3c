use crate::constants::{IDLE_HUM_ID, ZAP_SOUND_ID};
use crate::core::AudioCue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Audio cues backed by `<audio>` elements on the page. Missing elements and
/// rejected `play()` calls (autoplay policy, no device) are logged and ignored.
pub struct ElementAudio {
    zap: Option<web::HtmlAudioElement>,
    hum: Option<web::HtmlAudioElement>,
}

fn audio_element(document: &web::Document, id: &str) -> Option<web::HtmlAudioElement> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<web::HtmlAudioElement>() {
        Ok(a) => Some(a),
        Err(_) => {
            log::warn!("[audio] #{} is not an <audio> element", id);
            None
        }
    }
}

fn play_best_effort(el: &web::HtmlAudioElement, label: &'static str) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] {} play rejected: {:?}", label, e);
            }
        }),
        Err(e) => log::debug!("[audio] {} play error: {:?}", label, e),
    }
}

impl ElementAudio {
    pub fn from_document(document: &web::Document) -> Self {
        let zap = audio_element(document, ZAP_SOUND_ID);
        let hum = audio_element(document, IDLE_HUM_ID);
        if let Some(h) = &hum {
            h.set_loop(true);
        }
        log::info!(
            "[audio] zap={} hum={}",
            zap.is_some(),
            hum.is_some()
        );
        Self { zap, hum }
    }
}

impl AudioCue for ElementAudio {
    fn play_zap(&mut self) {
        if let Some(z) = &self.zap {
            play_best_effort(z, "zap");
        }
    }

    fn play_hum(&mut self) {
        if let Some(h) = &self.hum {
            play_best_effort(h, "hum");
        }
    }

    fn pause_hum(&mut self) {
        if let Some(h) = &self.hum {
            _ = h.pause();
        }
    }

    fn set_hum_volume(&mut self, volume: f64) {
        if let Some(h) = &self.hum {
            h.set_volume(volume);
        }
    }
}
