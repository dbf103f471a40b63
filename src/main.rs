//! Thermoband Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  SimulatedThermometer   IndicatorBank<P>   LogEventSink      │
//! │  (TemperatureSource)    (IndicatorPort)    (EventSink)       │
//! │  JsonConfigFile         FreeRtos / StdDelay                  │
//! │  (ConfigPort, host)     (DelayNs)                            │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │          AppService (bands · controller)             │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Build with `--features espidf` for the board; without it the same loop
//! runs on the host against simulated lines.
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use thermoband::adapters::log_sink::LogEventSink;
use thermoband::app::bands::Band;
use thermoband::app::service::AppService;
use thermoband::config::SystemConfig;
use thermoband::error::Error;
use thermoband::pins;
use thermoband::sensors::simulated::{self, SimulatedThermometer};

fn main() -> Result<()> {
    // ── 1. Bootstrap logging ──────────────────────────────────
    init_logging()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Thermoband v{:<24}║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
    info!(
        "Console: UART tx=GPIO{} rx=GPIO{} @ {} baud",
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO,
        pins::UART_BAUD
    );

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config();
    config.validate().map_err(Error::from)?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Seed the simulated source ──────────────────────────
    let seed = match config.seed {
        Some(seed) => {
            info!("Generator seed {:#018x} (fixed)", seed);
            seed
        }
        None => {
            let seed = simulated::entropy_seed();
            info!("Generator seed {:#018x} (entropy)", seed);
            seed
        }
    };
    let mut source = SimulatedThermometer::from_seed(seed);
    let mut sink = LogEventSink::new();

    for band in Band::ALL {
        let ch = config.channels.get(band);
        info!("Channel {:<4} -> {} LED on GPIO{}", band, ch.name, ch.gpio);
    }

    // ── 4. Resolve channels and enter the loop ────────────────
    let mut app = AppService::new(config.clone());
    info!("System ready. Entering sampling loop.");
    run_loop(&mut app, &config, &mut source, &mut sink)
}

// ── Board ─────────────────────────────────────────────────────

#[cfg(feature = "espidf")]
fn init_logging() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    Ok(())
}

#[cfg(feature = "espidf")]
fn load_config() -> SystemConfig {
    // No persistent store on the board; the channel map is compiled in.
    SystemConfig::default()
}

#[cfg(feature = "espidf")]
fn run_loop(
    app: &mut AppService,
    config: &SystemConfig,
    source: &mut SimulatedThermometer,
    sink: &mut LogEventSink,
) -> Result<()> {
    use esp_idf_hal::delay::FreeRtos;
    use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
    use thermoband::config::Channel;
    use thermoband::drivers::indicator::IndicatorBank;

    fn line(ch: &Channel) -> Result<PinDriver<'static, AnyOutputPin, Output>> {
        // SAFETY: each GPIO is claimed exactly once; `validate()` rejects
        // maps that bind two channels to the same line.
        let pin = unsafe { AnyOutputPin::new(ch.gpio) };
        Ok(PinDriver::output(pin)?)
    }

    let c = &config.channels;
    let mut bank = IndicatorBank::new(line(&c.high)?, line(&c.mid)?, line(&c.low)?);
    app.run(source, &mut bank, sink, &mut FreeRtos)
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(feature = "espidf"))]
fn init_logging() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;
    Ok(())
}

#[cfg(not(feature = "espidf"))]
fn load_config() -> SystemConfig {
    use log::warn;
    use thermoband::adapters::config_file::{CONFIG_ENV, JsonConfigFile};
    use thermoband::app::ports::{ConfigError, ConfigPort};

    let port = JsonConfigFile::from_env();
    match port.load() {
        Ok(cfg) => {
            if let Some(path) = port.path() {
                info!("Config loaded from {}", path.display());
            }
            cfg
        }
        Err(ConfigError::NotFound) => {
            info!("{} not set or file missing, using defaults", CONFIG_ENV);
            SystemConfig::default()
        }
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            SystemConfig::default()
        }
    }
}

#[cfg(not(feature = "espidf"))]
fn run_loop(
    app: &mut AppService,
    config: &SystemConfig,
    source: &mut SimulatedThermometer,
    sink: &mut LogEventSink,
) -> Result<()> {
    use thermoband::adapters::delay::StdDelay;
    use thermoband::drivers::indicator::IndicatorBank;
    use thermoband::drivers::sim_pin::SimPin;

    let c = &config.channels;
    let mut bank = IndicatorBank::new(
        SimPin::new(c.high.gpio),
        SimPin::new(c.mid.gpio),
        SimPin::new(c.low.gpio),
    );
    app.run(source, &mut bank, sink, &mut StdDelay::new())
}
