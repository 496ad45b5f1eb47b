//! Configuração carregada a partir de `juridico.toml`.
//!
//! A struct [`JuridicoConfig`] contém os parâmetros do binário.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `JURIDICO_LOG` tem precedência sobre o arquivo.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::documento::FormatoDocumento;
use crate::logging::FILTRO_PADRAO;

pub const ARQUIVO_PADRAO: &str = "juridico.toml";

/// Configuração de nível superior carregada de `juridico.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct JuridicoConfig {
    /// Filtro do `tracing` (sintaxe de `EnvFilter`).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Formato usado quando o demo gera documentos.
    #[serde(default = "default_formato_padrao")]
    pub formato_padrao: String,

    /// Número do processo criado pelo demo.
    #[serde(default = "default_numero_demo")]
    pub numero_demo: String,

    #[serde(default = "default_assunto_demo")]
    pub assunto_demo: String,
}

fn default_log_filter() -> String {
    FILTRO_PADRAO.to_string()
}

// Valor padrão para o formato de documento: "PDF".
fn default_formato_padrao() -> String {
    "PDF".to_string()
}

fn default_numero_demo() -> String {
    "5002025.8.24.0038".to_string()
}

fn default_assunto_demo() -> String {
    "Danos Morais".to_string()
}

impl Default for JuridicoConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            formato_padrao: default_formato_padrao(),
            numero_demo: default_numero_demo(),
            assunto_demo: default_assunto_demo(),
        }
    }
}

impl JuridicoConfig {
    /// Carrega a configuração de `juridico.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        let path = Path::new(ARQUIVO_PADRAO);
        let config = if path.exists() {
            Self::parse_file(path)?
        } else {
            Self::default()
        };
        config.finalizar()
    }

    /// Carrega a configuração de um caminho explícito; o arquivo precisa existir.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::parse_file(path)?.finalizar()
    }

    /// Formato padrão já validado.
    pub fn formato(&self) -> Result<FormatoDocumento> {
        Ok(self.formato_padrao.parse::<FormatoDocumento>()?)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("falha ao ler {}", path.display()))?;
        let config = toml::from_str::<JuridicoConfig>(&contents)
            .with_context(|| format!("falha ao interpretar {}", path.display()))?;
        Ok(config)
    }

    fn finalizar(mut self) -> Result<Self> {
        // Variável de ambiente tem precedência sobre o arquivo para o filtro de log.
        if let Ok(filtro) = std::env::var("JURIDICO_LOG")
            && !filtro.is_empty()
        {
            self.log_filter = filtro;
        }

        self.formato()
            .context("`formato_padrao` inválido em juridico.toml")?;
        Ok(self)
    }
}
