use chrono::{DateTime, Utc};

use crate::documento::{Documento, FormatoDocumento};
use crate::error::{ErroJuridico, Result};

/// Tipo do trâmite sintético criado quando um juiz profere a decisão.
pub const TIPO_JULGAMENTO: &str = "Julgamento";

/// Uma entrada no histórico de um processo.
///
/// Também é a fábrica de [`Documento`]: no máximo um documento pode ser
/// anexado, e depois disso o trâmite não muda mais.
///
/// Um trâmite com documento só existe depois de passar por
/// [`gerar_documento`](Self::gerar_documento):
///
/// ```compile_fail
/// let _: sistema_juridico::Tramite = serde_json::from_str(
///     r#"{"tipo":"Julgamento","descricao":"","documento_anexo":null,"registrado_em":"2025-01-01T00:00:00Z"}"#,
/// ).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tramite {
    tipo: String,
    descricao: String,
    documento_anexo: Option<Documento>,
    registrado_em: DateTime<Utc>,
}

impl Tramite {
    pub fn new(tipo: impl Into<String>, descricao: impl Into<String>) -> Self {
        Self {
            tipo: tipo.into(),
            descricao: descricao.into(),
            documento_anexo: None,
            registrado_em: Utc::now(),
        }
    }

    pub fn tipo(&self) -> &str {
        &self.tipo
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn documento_anexo(&self) -> Option<&Documento> {
        self.documento_anexo.as_ref()
    }

    pub fn registrado_em(&self) -> DateTime<Utc> {
        self.registrado_em
    }

    pub fn is_julgamento(&self) -> bool {
        self.tipo == TIPO_JULGAMENTO
    }

    /// Gera o documento do formato pedido e o anexa a este trâmite.
    ///
    /// - Formato desconhecido: [`ErroJuridico::FormatoNaoSuportado`], nada é anexado.
    /// - Trâmite que já tem documento: [`ErroJuridico::EstadoInvalido`].
    pub fn gerar_documento(
        &mut self,
        tipo: &str,
        conteudo: impl Into<Vec<u8>>,
    ) -> Result<&Documento> {
        let formato: FormatoDocumento = tipo.parse()?;

        if self.documento_anexo.is_some() {
            return Err(ErroJuridico::EstadoInvalido(format!(
                "o trâmite '{}' já possui documento anexado",
                self.tipo
            )));
        }

        let documento = Documento::new(formato, conteudo.into());
        tracing::debug!(
            tramite = %self.tipo,
            formato = %formato,
            bytes = documento.tamanho(),
            "documento gerado"
        );

        Ok(&*self.documento_anexo.insert(documento))
    }
}
