//! Configuração do mock carregada a partir de `orchestrator-mock.toml`.
//!
//! A struct [`MockConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! As variáveis `ORCHESTRATOR_MOCK_HOST` e `ORCHESTRATOR_MOCK_PORT` têm
//! precedência sobre o arquivo.

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::MockError;

const DEFAULT_PATH: &str = "orchestrator-mock.toml";
const HOST_VAR: &str = "ORCHESTRATOR_MOCK_HOST";
const PORT_VAR: &str = "ORCHESTRATOR_MOCK_PORT";

/// Configuração de nível superior carregada de `orchestrator-mock.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// Endereço em que o servidor HTTP escuta.
    #[serde(default = "default_host")]
    pub host: String,

    /// Porta do servidor HTTP.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Número de workers do actix; 0 usa o padrão do framework.
    #[serde(default)]
    pub workers: usize,

    /// URL base usada pelo comando `watch`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Intervalo entre consultas de status, em milissegundos.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Máximo de consultas antes de desistir de um job.
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_max_polls() -> u32 {
    120
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            max_polls: default_max_polls(),
        }
    }
}

impl MockConfig {
    /// Carrega a configuração do caminho informado ou de `orchestrator-mock.toml`.
    ///
    /// Um caminho explícito precisa existir; o arquivo padrão é opcional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_PATH);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, MockError> {
        if !path.exists() {
            return Err(MockError::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Aplica as variáveis de ambiente; `lookup` permite testar sem tocar no ambiente real.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), MockError> {
        if let Some(host) = lookup(HOST_VAR)
            && !host.is_empty()
        {
            self.host = host;
        }

        if let Some(port) = lookup(PORT_VAR)
            && !port.is_empty()
        {
            self.port = port
                .parse()
                .map_err(|_| MockError::Config(format!("{PORT_VAR} must be a port number, got {port:?}")))?;
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
