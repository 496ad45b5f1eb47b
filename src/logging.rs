//! Inicialização do `tracing` para o binário.
//!
//! O núcleo só emite eventos; quem decide se e para onde eles vão é o
//! processo hospedeiro. A saída vai para stderr para que stdout fique livre
//! para o relatório JSON.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const FILTRO_PADRAO: &str = "sistema_juridico=info";

static INICIALIZADO: OnceLock<()> = OnceLock::new();

/// Escolhe o filtro efetivo: `RUST_LOG` > configuração > padrão.
pub fn resolver_filtro(configurado: Option<&str>) -> String {
    match std::env::var("RUST_LOG") {
        Ok(valor) if !valor.trim().is_empty() => valor,
        _ => configurado
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(FILTRO_PADRAO)
            .to_string(),
    }
}

/// Instala o subscriber global. Retorna `false` se já havia sido instalado.
pub fn init(filtro: &str) -> bool {
    let mut instalado = false;
    INICIALIZADO.get_or_init(|| {
        let filter = EnvFilter::try_new(filtro).unwrap_or_else(|_| EnvFilter::new(FILTRO_PADRAO));
        instalado = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok();
    });
    instalado
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtro_configurado_quando_sem_rust_log() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert_eq!(resolver_filtro(Some("sistema_juridico=debug")), "sistema_juridico=debug");
        assert_eq!(resolver_filtro(Some("  ")), FILTRO_PADRAO);
        assert_eq!(resolver_filtro(None), FILTRO_PADRAO);
    }

    #[test]
    fn segunda_inicializacao_e_ignorada() {
        init(FILTRO_PADRAO);
        assert!(!init("sistema_juridico=trace"));
    }
}
