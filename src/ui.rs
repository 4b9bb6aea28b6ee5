//! Interface de terminal do comando `watch` — spinner e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de progresso e `console` para
//! estilização com cores. O [`JobProgress`] acompanha visualmente um job
//! simulado enquanto ele percorre as etapas.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::simulator::StatusPayload;
use crate::state_machine::{StageState, Steps};
use crate::watch::WatchReport;

/// Indicador visual de progresso para um job acompanhado no terminal.
///
/// Exibe um spinner com a fase atual e a linha de etapas; ao final imprime
/// a arquitetura, os arquivos gerados e a revisão.
pub struct JobProgress {
    // Spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para sucesso.
    green: Style,
    // Estilo ciano para títulos.
    cyan: Style,
    // Estilo esmaecido para conteúdo secundário.
    dim: Style,
}

/// Linha compacta com o estado de cada etapa, ex.: `architect ✓  backend …  integration ·  review ·`.
pub fn render_steps(steps: &Steps) -> String {
    steps
        .iter()
        .map(|(stage, state)| {
            let mark = match state {
                StageState::Complete => "✓",
                StageState::Running => "…",
                StageState::Pending => "·",
            };
            format!("{stage} {mark}")
        })
        .collect::<Vec<_>>()
        .join("  ")
}

impl JobProgress {
    /// Inicia o spinner com a descrição do job.
    pub fn start(description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("SUBMIT: {description}"));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            cyan: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Atualiza o spinner com a fase e as etapas do payload recebido.
    pub fn update(&self, payload: &StatusPayload) {
        self.pb
            .set_message(format!("{}: {}", payload.phase(), render_steps(&payload.steps)));
    }

    /// Finaliza o spinner e imprime o resultado do job.
    pub fn complete(&self, report: &WatchReport) {
        self.pb.finish_and_clear();
        println!(
            "  {} Job {} completed after {} polls",
            self.green.apply_to("✓"),
            report.job_id,
            report.polls
        );
        let phases: Vec<String> = report.phases.iter().map(ToString::to_string).collect();
        println!("    {}", self.dim.apply_to(phases.join(" → ")));

        let payload = &report.last;
        if let Some(arch) = &payload.architecture {
            println!();
            println!("{}", self.cyan.apply_to(format!("─── Feature: {} ───", arch.feature)));
            println!("  model {}", arch.model.name);
            for (field, ty) in &arch.model.fields {
                println!("    {field}: {ty}");
            }
        }

        if let Some(files) = &payload.files {
            println!();
            println!("{}", self.cyan.apply_to("─── Files ───"));
            for file in files {
                println!("  {}", file.path);
                println!("    {}", self.dim.apply_to(&file.content));
            }
        }

        if let Some(review) = &payload.review {
            println!();
            println!("{}", self.cyan.apply_to("─── Review ───"));
            println!("  {review}");
        }
    }

    /// Interrompe o spinner sem resultado (ex.: erro durante o polling).
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
