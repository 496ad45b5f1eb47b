//! Interface de linha de comando baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (demo, formatos, validar)
//! e flags globais (--config, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ciclo de vida de processos judiciais: trâmites, audiências e julgamento.
#[derive(Debug, Parser)]
#[command(name = "juridico", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho para um arquivo de configuração (padrão: ./juridico.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Habilita logs de depuração.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa o fluxo completo de um processo, do despacho ao julgamento.
    Demo {
        /// Imprime apenas o relatório JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Lista os formatos de documento reconhecidos.
    Formatos,

    /// Verifica se uma tag de formato é reconhecida.
    Validar {
        /// Tag do formato, ex.: PDF.
        tag: String,
    },
}
