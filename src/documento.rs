//! Documentos gerados pelos trâmites.
//!
//! Um [`Documento`] só nasce pelo método fábrica
//! [`Tramite::gerar_documento`](crate::tramite::Tramite::gerar_documento); a
//! variante concreta é escolhida pela tag de formato. Depois de criado, o
//! documento é imutável e pertence exclusivamente ao trâmite de origem.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ErroJuridico, Result};

/// Conjunto fechado de formatos reconhecidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormatoDocumento {
    Pdf,
    Docx,
    Odt,
    Html,
    Txt,
}

impl FormatoDocumento {
    pub const TODOS: [FormatoDocumento; 5] = [
        FormatoDocumento::Pdf,
        FormatoDocumento::Docx,
        FormatoDocumento::Odt,
        FormatoDocumento::Html,
        FormatoDocumento::Txt,
    ];

    pub fn mime_type(&self) -> &'static str {
        match self {
            FormatoDocumento::Pdf => "application/pdf",
            FormatoDocumento::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            FormatoDocumento::Odt => "application/vnd.oasis.opendocument.text",
            FormatoDocumento::Html => "text/html",
            FormatoDocumento::Txt => "text/plain",
        }
    }

    pub fn extensao(&self) -> &'static str {
        match self {
            FormatoDocumento::Pdf => "pdf",
            FormatoDocumento::Docx => "docx",
            FormatoDocumento::Odt => "odt",
            FormatoDocumento::Html => "html",
            FormatoDocumento::Txt => "txt",
        }
    }
}

impl fmt::Display for FormatoDocumento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatoDocumento::Pdf => write!(f, "PDF"),
            FormatoDocumento::Docx => write!(f, "DOCX"),
            FormatoDocumento::Odt => write!(f, "ODT"),
            FormatoDocumento::Html => write!(f, "HTML"),
            FormatoDocumento::Txt => write!(f, "TXT"),
        }
    }
}

impl FromStr for FormatoDocumento {
    type Err = ErroJuridico;

    /// A comparação ignora maiúsculas/minúsculas e espaços nas pontas.
    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_uppercase().as_str() {
            "PDF" => Ok(FormatoDocumento::Pdf),
            "DOCX" => Ok(FormatoDocumento::Docx),
            "ODT" => Ok(FormatoDocumento::Odt),
            "HTML" => Ok(FormatoDocumento::Html),
            "TXT" => Ok(FormatoDocumento::Txt),
            _ => Err(ErroJuridico::FormatoNaoSuportado(tag.to_string())),
        }
    }
}

/// Valida uma tag de formato sem criar documento algum.
///
/// Função pura: o resultado depende apenas de `tag`.
pub fn validar_formato(tag: &str) -> Result<FormatoDocumento> {
    tag.parse()
}

/// Artefato imutável produzido por um trâmite.
///
/// Não há caminho público de construção fora da fábrica, nem por serde:
///
/// ```compile_fail
/// let _: sistema_juridico::Documento =
///     serde_json::from_str(r#"{"tipo":"PDF","conteudo":[1,2]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documento {
    id: Uuid,
    tipo: FormatoDocumento,
    conteudo: Vec<u8>,
    criado_em: DateTime<Utc>,
}

impl Documento {
    // Restrito ao crate: fora daqui, documentos só saem da fábrica do Tramite.
    pub(crate) fn new(tipo: FormatoDocumento, conteudo: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tipo,
            conteudo,
            criado_em: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tipo(&self) -> FormatoDocumento {
        self.tipo
    }

    pub fn conteudo(&self) -> &[u8] {
        &self.conteudo
    }

    pub fn criado_em(&self) -> DateTime<Utc> {
        self.criado_em
    }

    /// Tamanho do conteúdo em bytes.
    pub fn tamanho(&self) -> usize {
        self.conteudo.len()
    }

    pub fn mime_type(&self) -> &'static str {
        self.tipo.mime_type()
    }

    /// Verifica se o formato do documento pertence ao conjunto reconhecido.
    pub fn validar_formato(&self) -> bool {
        validar_formato(&self.tipo.to_string()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignora_caixa() {
        assert_eq!("pdf".parse::<FormatoDocumento>().unwrap(), FormatoDocumento::Pdf);
        assert_eq!(" Docx ".parse::<FormatoDocumento>().unwrap(), FormatoDocumento::Docx);
    }

    #[test]
    fn parse_rejeita_formato_desconhecido() {
        let err = "EXE".parse::<FormatoDocumento>().unwrap_err();
        assert!(matches!(err, ErroJuridico::FormatoNaoSuportado(ref t) if t == "EXE"));
        assert!(validar_formato("").is_err());
    }

    #[test]
    fn display_e_parse_concordam_para_todos() {
        for formato in FormatoDocumento::TODOS {
            assert_eq!(formato.to_string().parse::<FormatoDocumento>().unwrap(), formato);
        }
    }

    #[test]
    fn documento_expoe_metadados() {
        let doc = Documento::new(FormatoDocumento::Pdf, b"conteudo".to_vec());
        assert_eq!(doc.tipo(), FormatoDocumento::Pdf);
        assert_eq!(doc.tamanho(), 8);
        assert_eq!(doc.mime_type(), "application/pdf");
        assert!(doc.validar_formato());
    }

    #[test]
    fn formato_serializa_em_maiusculas() {
        let json = serde_json::to_string(&FormatoDocumento::Html).unwrap();
        assert_eq!(json, "\"HTML\"");
    }
}
