use std::process::ExitCode;

use clap::Parser;
use sistema_juridico::cli::{Cli, Command};
use sistema_juridico::config::JuridicoConfig;
use sistema_juridico::processo::RelatorioProcesso;
use sistema_juridico::ui::{self, Painel};
use sistema_juridico::{demo, documento, logging};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => JuridicoConfig::load_from(path)?,
        None => JuridicoConfig::load()?,
    };

    let filtro = if cli.verbose {
        "sistema_juridico=debug".to_string()
    } else {
        logging::resolver_filtro(Some(&config.log_filter))
    };
    logging::init(&filtro);

    match cli.command {
        Command::Demo { json } => {
            let painel = (!json).then(|| Painel::start(&config.numero_demo));
            let resultado = demo::executar(&config, painel.as_ref())?;
            let relatorio = RelatorioProcesso::from_processo(&resultado.processo);

            match painel {
                Some(painel) => {
                    painel.concluir(&resultado.processo);
                    painel.notificacoes(&resultado.advogado.borrow());
                    painel.relatorio(&relatorio);
                }
                None => println!("{}", relatorio.to_json()?),
            }
        }
        Command::Formatos => {
            for linha in ui::tabela_formatos() {
                println!("{linha}");
            }
        }
        Command::Validar { tag } => match documento::validar_formato(&tag) {
            Ok(formato) => println!("{formato}: {}", formato.mime_type()),
            Err(e) => {
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
