//! # Monitor Firmware (host)
//!
//! Roda o loop do monitor de temperatura/umidade no PC: stdin/stdout fazem o
//! papel da serial, o DHT11 e o LED são simulados.
//!
//! ## Uso
//! ```bash
//! dht_monitor                          # monitor.toml ao lado do executável
//! dht_monitor --config ./monitor.toml  # config explícita
//! RUST_LOG=debug dht_monitor           # logs detalhados (stderr)
//! ```

mod hardware;
mod serial;

use hardware::{LoggedLed, SimulatedDht, StdDelay};
use monitor_core::config::AppConfig;
use monitor_core::{MonitorLoop, Step};
use serial::SerialLink;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

fn main() {
    // ── Logging (stderr: stdout é a serial) ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Carregar config ──
    let config_path = config_path_from_args().unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load(&config_path);

    // Salva config padrão se não existir
    if !config_path.exists() {
        if let Err(e) = config.save(&config_path) {
            warn!("Não foi possível salvar config padrão: {e}");
        }
    }

    for problem in config.validate() {
        warn!("Config: {problem}");
    }

    // ── Hardware ──
    let sensor = SimulatedDht::new(config.simulator.clone());
    let mut monitor = match MonitorLoop::new(sensor, LoggedLed::default(), StdDelay, &config) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("Falha ao inicializar o monitor: {e}");
            return;
        }
    };
    info!("Monitor inicializado");

    let serial = SerialLink::spawn_stdin();
    // 0 faria o loop girar sem pausa em `try_recv`
    let idle_poll = Duration::from_millis(config.serial.idle_poll_ms.max(1));

    // ── Banner ──
    let stdout = std::io::stdout();
    {
        let mut out = stdout.lock();
        if let Err(e) = monitor.write_banner(&mut out) {
            error!("Erro ao escrever banner: {e}");
        }
        out.flush().ok();
    }

    // ── Loop principal ──
    let mut wait = Duration::ZERO;
    loop {
        let input = serial.read_buffered(wait);

        let mut out = stdout.lock();
        let result = monitor.step(input.as_deref(), &mut out);
        if let Err(e) = out.flush() {
            error!("Erro ao escrever na serial: {e}");
        }
        drop(out);

        match result {
            // O ciclo de amostragem já pausou no driver do LED
            Ok(Step::Sampled) => wait = Duration::ZERO,
            Ok(Step::Idle | Step::AwaitingInput) => wait = idle_poll,
            Ok(Step::Halted) => break,
            Err(e) => {
                error!("{e}");
                wait = idle_poll;
            }
        }
    }

    if config.serial.exit_on_halt {
        info!("Encerrando");
        return;
    }
    info!("Firmware parado (comando 5); Ctrl+C para sair");
    loop {
        std::thread::park();
    }
}

/// `--config <path>`
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
