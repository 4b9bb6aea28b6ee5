//! Tipos de erro para o cliente HTTP do mock.
//!
//! Define [`ClientError`] com variantes para job inexistente, erros da API
//! e erros de rede, derivadas com `thiserror`.

use thiserror::Error;

/// Erros que podem ocorrer ao conversar com o servidor mock.
#[derive(Debug, Error)]
pub enum ClientError {
    /// O servidor respondeu 404 para o id consultado.
    #[error("job {0} not found")]
    JobNotFound(String),

    /// Qualquer outra resposta não-2xx, com o código HTTP e o corpo recebido.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout) ou corpo inválido.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
