//! Interface de linha de comando do mock baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (serve, watch, simulate)
//! e flags globais (--config, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mock de orquestrador de geração de features para demos e testes de frontend.
#[derive(Debug, Parser)]
#[command(name = "orchestrator-mock", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho para o arquivo de configuração (padrão: ./orchestrator-mock.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sobe o servidor HTTP mock.
    Serve {
        /// Endereço de escuta (sobrepõe a configuração).
        #[arg(long)]
        host: Option<String>,

        /// Porta de escuta (sobrepõe a configuração).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Cria um job num servidor em execução e acompanha o progresso até o fim.
    Watch {
        /// Descrição da feature a gerar.
        description: String,

        /// URL base do servidor mock.
        #[arg(long)]
        url: Option<String>,

        /// Intervalo entre consultas de status, em milissegundos.
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Imprime o payload de status para um tempo decorrido, em segundos.
    Simulate {
        /// Segundos desde a criação do job.
        elapsed: f64,
    },
}
