//! stagecam main entry point.
//!
//! A 2D camera runtime written in Rust using:
//! - **bevy_ecs** for the entity-component-system world
//! - **glam** for vector math
//! - **raylib** for windowing and drawing (optional `raylib` feature)
//!
//! By default the binary runs headless: it loads a scene and a camera script,
//! advances a fixed number of frames with a manual clock and logs the camera
//! trajectory. With `--window` (feature `raylib`) the same runtime is drawn
//! in a window and driven by the mouse.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene assets/scene.json --script assets/script.json --frames 240
//! cargo run --release --features raylib -- --window --scene assets/scene.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use stagecam::game::{Runtime, RuntimeClock};
use stagecam::resources::camerascript::CameraScript;
use stagecam::resources::gameconfig::GameConfig;
use stagecam::resources::scene::SceneData;

/// Frames between two trajectory log lines in headless mode.
const LOG_EVERY: u32 = 30;

/// stagecam 2D camera runtime
#[derive(Parser)]
#[command(version, about = "Smoothed, bounded, shakeable 2D camera runtime")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Scene JSON to spawn at startup.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Camera script JSON to play.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of frames to run headless.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Frame delta in seconds for headless runs.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seed for the shake jitter.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,

    /// Open a raylib window instead of running headless.
    #[cfg(feature = "raylib")]
    #[arg(long)]
    window: bool,
}

fn load_inputs(cli: &Cli, runtime: &mut Runtime) -> Result<(), String> {
    if let Some(path) = &cli.scene {
        let scene = SceneData::load_from_file(path)?;
        runtime.load_scene(&scene);
    }
    if let Some(path) = &cli.script {
        let script = CameraScript::load_from_file(path)?;
        runtime.set_script(script);
    }
    Ok(())
}

fn build_runtime(cli: &Cli, config: GameConfig, clock: RuntimeClock) -> Runtime {
    let mut runtime = Runtime::new(config, clock);
    if let Some(seed) = cli.seed {
        runtime = runtime.with_seed(seed);
    }
    if let Err(e) = load_inputs(cli, &mut runtime) {
        error!("{}", e);
        std::process::exit(1);
    }
    runtime
}

fn run_headless(cli: &Cli, config: GameConfig) {
    let mut runtime = build_runtime(cli, config, RuntimeClock::manual());
    let dt = if cli.dt.is_finite() && cli.dt > 0.0 {
        cli.dt
    } else {
        warn!("Invalid --dt {}, using 1/60", cli.dt);
        1.0 / 60.0
    };

    for frame in 1..=cli.frames {
        runtime.tick(dt);
        if frame % LOG_EVERY == 0 || frame == cli.frames {
            let camera = runtime.camera();
            let pos = camera.position();
            info!(
                "frame {:>5}  pos=({:.2}, {:.2})  zoom={:.2}  shaking={}  transitions={}  visible={}  tiles={}",
                frame,
                pos.x,
                pos.y,
                camera.zoom(),
                camera.is_shaking(),
                camera.transition_count(),
                runtime.draw_list().len(),
                runtime.draw_list().tiles.len()
            );
        }
    }

    for line in &runtime.overlay().lines {
        info!("[debug] {}", line);
    }
}

#[cfg(feature = "raylib")]
fn run_window(cli: &Cli, config: GameConfig) {
    use stagecam::resources::screensize::ScreenSize;

    let (w, h) = config.screen_size();
    let target_fps = config.target_fps;
    let (mut rl, thread) = raylib::init()
        .size(w, h)
        .resizable()
        .title("stagecam")
        .build();
    rl.set_target_fps(target_fps);

    let mut runtime = build_runtime(cli, config, RuntimeClock::System);
    runtime.attach_window(rl, thread);

    loop {
        let (should_close, dt, screen) = {
            let rl = runtime
                .world()
                .non_send_resource::<raylib::RaylibHandle>();
            (
                rl.window_should_close(),
                rl.get_frame_time(),
                ScreenSize {
                    w: rl.get_screen_width(),
                    h: rl.get_screen_height(),
                },
            )
        };
        if should_close {
            break;
        }
        if *runtime.world().resource::<ScreenSize>() != screen {
            *runtime.world_mut().resource_mut::<ScreenSize>() = screen;
        }
        runtime.tick(dt);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("Config not loaded, using defaults: {}", e);
    }
    if cli.debug {
        config.debug = true;
    }

    #[cfg(feature = "raylib")]
    if cli.window {
        run_window(&cli, config);
        return;
    }

    run_headless(&cli, config);
}
