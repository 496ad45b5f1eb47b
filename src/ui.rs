//! Saída de terminal do binário: spinner e texto colorido.
//!
//! Usa `indicatif` para o spinner enquanto o processo tramita e `console`
//! para as cores. O [`Painel`] acompanha visualmente o demo.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::documento::FormatoDocumento;
use crate::pessoas::Advogado;
use crate::processo::{Processo, RelatorioProcesso, StatusProcesso};
use crate::tramite::Tramite;

/// Indicador visual da tramitação de um processo no terminal.
///
/// Verde para processo aberto, vermelho para encerrado e amarelo para
/// audiências.
pub struct Painel {
    pb: ProgressBar,
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl Painel {
    /// Inicia o spinner com o número do processo.
    pub fn start(numero: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Processo {numero}"));
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    /// Atualiza a mensagem do spinner com a etapa em andamento.
    pub fn etapa(&self, descricao: &str) {
        self.pb.set_message(descricao.to_string());
    }

    pub fn audiencia(&self, texto: &str) {
        self.pb
            .println(format!("  {} {texto}", self.yellow.apply_to("◷")));
    }

    /// Finaliza o spinner e mostra o histórico do processo.
    pub fn concluir(&self, processo: &Processo) {
        self.pb.finish_and_clear();
        let style = match processo.status() {
            StatusProcesso::Aberto => &self.green,
            StatusProcesso::Encerrado => &self.red,
        };
        println!(
            "{} {} ({})",
            style.apply_to(format!("[{}]", processo.status())),
            processo.numero(),
            processo.assunto()
        );
        for (i, tramite) in processo.tramites().iter().enumerate() {
            println!("  {}", linha_tramite(i + 1, tramite));
        }
        if let Some(data) = processo.data_encerramento() {
            println!("  {}", self.dim.apply_to(format!("encerrado em {data}")));
        }
    }

    pub fn notificacoes(&self, advogado: &Advogado) {
        println!();
        println!(
            "{}",
            self.green
                .apply_to(format!("─── Avisos para {} ───", advogado.nome()))
        );
        for aviso in advogado.notificacoes() {
            println!("  • {aviso}");
        }
    }

    pub fn relatorio(&self, relatorio: &RelatorioProcesso) {
        println!();
        println!("{}", self.dim.apply_to("─── Relatório ───"));
        println!("{}", relatorio.to_json().unwrap_or_default());
    }
}

/// Uma linha do histórico: posição, tipo, descrição e documento anexo.
pub fn linha_tramite(posicao: usize, tramite: &Tramite) -> String {
    let mut linha = format!("{posicao:>2}. {}: {}", tramite.tipo(), tramite.descricao());
    if let Some(doc) = tramite.documento_anexo() {
        linha.push_str(&format!(" [{} {}B]", doc.tipo(), doc.tamanho()));
    }
    linha
}

/// Tabela de formatos reconhecidos para o subcomando `formatos`.
pub fn tabela_formatos() -> Vec<String> {
    FormatoDocumento::TODOS
        .iter()
        .map(|f| format!("{:<5} .{:<5} {}", f.to_string(), f.extensao(), f.mime_type()))
        .collect()
}
