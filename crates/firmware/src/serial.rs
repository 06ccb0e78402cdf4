//! Link serial do host: uma thread lê o stdin e entrega as linhas ao loop via
//! channel.
//!
//! O loop trata o que chegou como o buffer de uma UART: tudo o que estiver
//! pendente no início de uma volta vira um único bloco.

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, bounded};
use std::io::BufRead;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct SerialLink {
    rx: Receiver<String>,
}

impl SerialLink {
    /// Inicia a thread de leitura do stdin.
    pub fn spawn_stdin() -> Self {
        let (tx, rx) = bounded::<String>(64);

        std::thread::Builder::new()
            .name("serial-stdin".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                reader_loop(stdin.lock(), &tx);
            })
            .expect("Falha ao criar thread da serial");

        Self { rx }
    }

    #[cfg(test)]
    pub fn from_receiver(rx: Receiver<String>) -> Self {
        Self { rx }
    }

    /// Devolve tudo o que está no buffer, esperando até `wait` pelo primeiro
    /// bloco. `None` se nada chegou.
    pub fn read_buffered(&self, wait: Duration) -> Option<String> {
        let first = if wait.is_zero() {
            match self.rx.try_recv() {
                Ok(chunk) => chunk,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
            }
        } else {
            match self.rx.recv_timeout(wait) {
                Ok(chunk) => chunk,
                Err(RecvTimeoutError::Timeout) => return None,
                Err(RecvTimeoutError::Disconnected) => {
                    // stdin fechado: mantém o ritmo de polling sem girar em falso
                    std::thread::sleep(wait);
                    return None;
                }
            }
        };

        let mut buffer = first;
        for chunk in self.rx.try_iter() {
            buffer.push_str(&chunk);
        }
        debug!("Serial ← {buffer:?}");
        Some(buffer)
    }
}

// Lê bytes crus: lixo não-UTF-8 vira U+FFFD e o parser numérico o ignora.
fn reader_loop<R: BufRead>(mut reader: R, tx: &Sender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                info!("Entrada da serial encerrada (EOF)");
                return;
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).into_owned();
                if tx.send(line).is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!("Erro ao ler a serial: {e}");
                return;
            }
        }
    }
}
