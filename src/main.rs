//! Fruit Slicer entry point
//!
//! Headless session: plays a few rounds with the autopilot and reports the
//! results. Usage: `fruit-slicer [settings.json] [--json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fruit_slicer::game::Host;
use fruit_slicer::platform::{Autopilot, Clock, ManualClock, MonotonicClock};
use fruit_slicer::renderer::{JsonLinesRenderer, LogRenderer, PresentationSink};
use fruit_slicer::{GameLoop, RoundEnd, Settings};

fn main() {
    env_logger::init();
    log::info!("Fruit Slicer (native) starting...");

    let mut settings_path = None;
    let mut json_frames = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_frames = true,
            _ => settings_path = Some(PathBuf::from(arg)),
        }
    }

    let settings = Settings::load(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Session seed: {}", seed);

    let mut clock: Box<dyn Clock> = if settings.fast_forward {
        Box::new(ManualClock::new(0))
    } else {
        Box::new(MonotonicClock::new())
    };
    let mut presenter: Box<dyn PresentationSink> = if json_frames {
        Box::new(JsonLinesRenderer::new(std::io::stdout().lock()))
    } else {
        Box::new(LogRenderer::new(settings.hud_log_interval))
    };
    let mut audio = settings.audio();
    let mut pilot = Autopilot::new(seed ^ 0x5EED, settings.autopilot());

    for round in 1..=settings.rounds {
        let round_seed = seed.wrapping_add(u64::from(round));
        let mut game = GameLoop::new(
            round_seed,
            settings.arena(),
            settings.tick_rate,
            clock.now_ms(),
        );
        let mut host = Host {
            clock: clock.as_mut(),
            input: &mut pilot,
            presenter: presenter.as_mut(),
            audio: &mut audio,
        };

        match game.run(&mut host) {
            RoundEnd::Lost(report) => {
                log::info!(
                    "Round {}: {} {}",
                    round,
                    report.headline(),
                    report.final_score_line()
                );
            }
            RoundEnd::Quit => {
                log::info!("Round {}: quit", round);
                break;
            }
        }
    }

    log::info!("Session over - {} sound cues played", audio.played());
}
