//! Comandos da serial e a máquina de estados da entrada de thresholds.

use crate::types::Quantity;

/// Comando decodificado a partir do código numérico.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1`
    ToggleMonitoring,
    /// `2` / `3`
    SetThresholds(Quantity),
    /// `4`
    ShowThresholds,
    /// `5`
    Exit,
    /// Qualquer outro código.
    Invalid(i32),
}

impl Command {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Command::ToggleMonitoring,
            2 => Command::SetThresholds(Quantity::Temperature),
            3 => Command::SetThresholds(Quantity::Humidity),
            4 => Command::ShowThresholds,
            5 => Command::Exit,
            other => Command::Invalid(other),
        }
    }
}

/// Entrada de thresholds em andamento.
///
/// `2`/`3` pedem dois valores seguidos. Em vez de bloquear o loop esperando a
/// serial, o pedido fica registrado aqui e cada chegada de entrada avança um
/// passo: `Idle → AwaitingMin → AwaitingMax → Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entry {
    #[default]
    Idle,
    AwaitingMin(Quantity),
    AwaitingMax(Quantity),
}

impl Entry {
    pub fn is_pending(self) -> bool {
        self != Entry::Idle
    }
}
