pub(crate) mod animations;
pub(crate) mod animator;
pub(crate) mod channel;
pub(crate) mod color;
pub(crate) mod intervaltimer;
pub(crate) mod output;
pub(crate) mod registry;
pub(crate) mod settings;

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use clap::Parser;

use crate::animator::Animator;
use crate::channel::{Channel, ChannelState};
use crate::output::{ConsoleBus, LedOutput};
use crate::registry::{ModeControl, ModeRegistry};
use crate::settings::Settings;

#[derive(Parser)]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// Target frame rate, overrides the settings file
    #[arg(long)]
    fps: Option<u32>,

    /// Brightness percentage (0-100), overrides the settings file
    #[arg(short, long)]
    brightness: Option<u8>,

    /// Mode to activate on the ring at startup
    #[arg(long, value_name = "MODE")]
    ring_mode: Option<String>,

    /// Mode to activate on the eyes at startup
    #[arg(long, value_name = "MODE")]
    eye_mode: Option<String>,

    /// List the available modes and exit
    #[arg(long)]
    list_modes: bool,
}

fn load_settings(args: &Cli) -> Settings {
    let mut settings = match args.config.as_deref() {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(msg) => panic!("Cannot read settings from {}: {}", path.display(), msg),
        },
        None => Settings::default(),
    };

    if let Some(fps) = args.fps {
        settings.fps = fps;
    }
    if let Some(brightness) = args.brightness {
        settings.brightness = brightness;
    }
    if args.ring_mode.is_some() {
        settings.ring_mode = args.ring_mode.clone();
    }
    if args.eye_mode.is_some() {
        settings.eye_mode = args.eye_mode.clone();
    }

    if let Err(msg) = settings.validate() {
        panic!("Invalid settings: {}", msg);
    }
    settings
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    if args.list_modes {
        for entry in ModeRegistry::entries() {
            println!("{:24} {}", entry.identifier, entry.label);
        }
        return;
    }

    let settings = load_settings(&args);
    log::info!(
        "{} LED modes available, {} fps, {}% brightness",
        ModeRegistry::entries().count(),
        settings.fps,
        settings.brightness
    );

    let ring = Arc::new(Mutex::new(ChannelState::new(Channel::Ring)));
    let eye = Arc::new(Mutex::new(ChannelState::new(Channel::Eye)));
    let control = ModeControl::new(
        ModeRegistry::new(settings.fps),
        Arc::clone(&ring),
        Arc::clone(&eye),
    );

    let output = LedOutput::new(Box::new(ConsoleBus), settings.brightness);
    let running = Arc::new(AtomicBool::new(true));
    let mut animator = Animator::new(
        Arc::clone(&ring),
        Arc::clone(&eye),
        output,
        settings.fps,
        Arc::clone(&running),
    );

    if let Some(mode) = settings.ring_mode.as_deref() {
        control.activate_on(Channel::Ring, mode);
    }
    if let Some(mode) = settings.eye_mode.as_deref() {
        control.activate_on(Channel::Eye, mode);
    }

    let stop = Arc::clone(&running);
    if let Err(error) = ctrlc::set_handler(move || {
        stop.store(false, Ordering::Relaxed);
    }) {
        panic!("Failed to install Ctrl-C handler: {}", error);
    }

    let animator_handle = match thread::Builder::new()
        .name("Animator".to_string())
        .spawn(move || animator.run())
    {
        Ok(handle) => handle,
        Err(error) => panic!("Failed to create thread: {}", error),
    };

    // Stand-in for the remote command path: mode identifiers on stdin switch
    // animations at runtime, one per line.
    let command_running = Arc::clone(&running);
    let res = thread::Builder::new()
        .name("Commands".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        let identifier = line.trim();
                        if !identifier.is_empty() {
                            control.activate(identifier);
                        }
                    }
                    Err(_) => break,
                }
                if !command_running.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
    if let Err(error) = res {
        panic!("Failed to create thread: {}", error);
    }

    while running.load(Ordering::Relaxed) {
        thread::sleep(Duration::from_millis(100));
    }

    if animator_handle.join().is_err() {
        log::error!("Animation thread panicked");
    }
}
