//! Bottle Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use bottle_dodge::Settings;
    use bottle_dodge::platform::web::WebGame;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        // Logger first so settings loading can report what it found
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let settings = Settings::load();
        log::set_max_level(settings.log_level().to_level_filter());

        log::info!("Bottle Dodge starting...");

        // Lives as long as the page; the pagehide listener holds its own copy
        let _game = WebGame::start("canvas", &settings)?;

        log::info!("Bottle Dodge running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bottle Dodge (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate one run without a display and report how it went
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use bottle_dodge::renderer::RecordingSurface;
    use bottle_dodge::sim::GameEvent;
    use bottle_dodge::{GameLoop, Settings};

    const MAX_TICKS: u32 = 60 * 60;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(12345);
    let mut game = GameLoop::new(RecordingSurface::new(), &settings, seed);
    game.start();

    let mut crashed_at = None;
    for tick in 0..MAX_TICKS {
        // Hop every second to make the run a little less trivial
        if tick % 60 == 0 {
            game.press_jump();
        }
        if let Some(GameEvent::Crashed { score }) = game.step() {
            crashed_at = Some((tick, score));
            break;
        }
    }
    game.render();
    let commands = game.surface().commands.len();
    game.stop();

    match crashed_at {
        Some((tick, score)) => {
            println!("Crashed after {} ticks with score {}", tick + 1, score)
        }
        None => println!(
            "Survived {} ticks, score {}",
            MAX_TICKS,
            game.state().score
        ),
    }
    println!("Final frame: {} draw commands", commands);
}
