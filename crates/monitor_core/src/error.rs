//! Erros do loop de monitoramento.

/// Erros produzidos por [`crate::monitor::MonitorLoop`].
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// O driver devolveu `NaN` em algum componente da leitura.
    #[error("Falha na leitura do sensor (NaN)")]
    SensorRead,

    #[error("Erro ao escrever na serial: {0}")]
    Serial(#[from] std::io::Error),

    #[error("Erro no pino do indicador: {0}")]
    Indicator(String),
}
