//! Celebration Effect
//!
//! Blocking alert followed by two confetti bursts: coloured pieces, then the
//! themed emoji variant. The overlay removes itself after the configured time.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::completion::Celebration;
use crate::config::AppConfig;

const CONFETTI_COLORS: &[&str] = &["#fcf403", "#62fc03", "#f4fc03", "#03e7fc", "#03fca5", "#a503fc", "#fc03ad", "#fc03c2"];

/// Emoji bursts use fewer, larger pieces
const EMOJI_PIECE_DIVISOR: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum PieceContent {
    Color(&'static str),
    Emoji(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f64,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub content: PieceContent,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        let base = format!(
            "left: {:.2}%; animation-delay: {}ms; animation-duration: {}ms;",
            self.left_pct, self.delay_ms, self.fall_ms
        );
        match &self.content {
            PieceContent::Color(color) => format!("{} background: {};", base, color),
            PieceContent::Emoji(_) => format!("{} font-size: 2.5rem;", base),
        }
    }

    fn text(&self) -> Option<&str> {
        match &self.content {
            PieceContent::Emoji(emoji) => Some(emoji),
            PieceContent::Color(_) => None,
        }
    }
}

/// Lay out `count` pieces across the viewport; `emojis` empty means coloured pieces.
///
/// `random` yields values in `[0, 1)`. Every piece lands within `duration_ms`.
pub fn layout_burst(count: u32, emojis: &[String], duration_ms: u32, mut random: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    let max_delay = duration_ms / 4;
    let min_fall = duration_ms / 2;

    (0..count)
        .map(|i| {
            let content = if emojis.is_empty() {
                PieceContent::Color(CONFETTI_COLORS[i as usize % CONFETTI_COLORS.len()])
            } else {
                PieceContent::Emoji(emojis[i as usize % emojis.len()].clone())
            };
            let delay_ms = (random() * max_delay as f64) as u32;
            let fall_span = duration_ms.saturating_sub(delay_ms + min_fall);
            ConfettiPiece {
                left_pct: random() * 100.0,
                delay_ms,
                fall_ms: min_fall + (random() * fall_span as f64) as u32,
                content,
            }
        })
        .collect()
}

/// Run the celebration for a completed list
pub fn celebrate(config: &AppConfig, celebration: Celebration) {
    log::info!("celebrating {} bought items", celebration.item_count);
    if let Err(e) = run(config) {
        log::error!("celebration failed: {}", e);
    }
}

fn run(config: &AppConfig) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    window
        .alert_with_message(&config.celebration_message)
        .map_err(|e| format!("{:?}", e))?;

    let document = window.document().ok_or("no document")?;
    let pieces = layout_burst(config.confetti_pieces, &[], config.confetti_duration_ms, js_sys::Math::random);
    spawn_burst(&document, &pieces, config.confetti_duration_ms)?;

    if !config.confetti_emojis.is_empty() {
        let count = (config.confetti_pieces / EMOJI_PIECE_DIVISOR).max(1);
        let pieces = layout_burst(count, &config.confetti_emojis, config.confetti_duration_ms, js_sys::Math::random);
        spawn_burst(&document, &pieces, config.confetti_duration_ms)?;
    }
    Ok(())
}

fn spawn_burst(document: &Document, pieces: &[ConfettiPiece], duration_ms: u32) -> Result<(), String> {
    let layer = create_layer(document, pieces)?;
    let body = document.body().ok_or("no body")?;
    body.append_child(&layer).map_err(|e| format!("{:?}", e))?;

    Timeout::new(duration_ms, move || layer.remove()).forget();
    Ok(())
}

fn create_layer(document: &Document, pieces: &[ConfettiPiece]) -> Result<Element, String> {
    let js_err = |e| format!("{:?}", e);
    let layer = document.create_element("div").map_err(js_err)?;
    layer.set_class_name("confetti-layer");

    for piece in pieces {
        let el = document.create_element("span").map_err(js_err)?;
        el.set_class_name(match piece.content {
            PieceContent::Color(_) => "confetti-piece",
            PieceContent::Emoji(_) => "confetti-piece emoji",
        });
        el.set_attribute("style", &piece.style()).map_err(js_err)?;
        el.set_text_content(piece.text());
        layer.append_child(&el).map_err(js_err)?;
    }
    Ok(layer)
}
