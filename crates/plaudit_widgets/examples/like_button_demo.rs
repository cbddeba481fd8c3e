//! Like Button Demo
//!
//! Drives the like button state machine headlessly:
//! - Clicks toward a 3-click maximum with the confetti preset
//! - Prints the fill level, accessibility label, and live particle count
//! - Steps simulated frames until every burst has cleaned itself up
//!
//! Run with: cargo run -p plaudit_widgets --example like_button_demo

use plaudit_core::{PointerButton, PointerEvent};
use plaudit_widgets::{LikeButton, LikeButtonConfig, ParticleConfig, ParticlePreset};

const FRAME_MS: f64 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut button = LikeButton::new(
        LikeButtonConfig::new()
            .max_clicks(3)
            .preset(ParticlePreset::Confetti)
            .particle_overrides(ParticleConfig::new().with_speed_ms(200)),
    );
    button.on_click(|clicks, _| println!("  on_click fired with count {clicks}"));
    button.on_right_click(|clicks, _| println!("  on_right_click saw count {clicks}"));

    // a toy LCG stands in for the host's random source
    let mut state = 0x1234_5678u32;
    let mut rng = move || {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (state >> 8) as f32 / (1u32 << 24) as f32
    };

    for round in 1..=4 {
        println!("click {round}:");
        button.handle_click(&mut PointerEvent::new(PointerButton::Primary), &mut rng);
        println!(
            "  fill {:.0}% (visual {:.0}%), particles {}, label {:?}",
            button.fill_percentage(),
            button.visual_fill(15.0),
            button.particles().len(),
            button.accessibility_label(),
        );
    }

    println!("right-click (never counts):");
    button.handle_right_click(&mut PointerEvent::new(PointerButton::Secondary));

    let mut elapsed = 0.0;
    while !button.particles().is_empty() {
        button.tick(FRAME_MS);
        elapsed += FRAME_MS;
    }
    println!("all bursts cleaned up after {elapsed:.0}ms of simulated frames");
}
