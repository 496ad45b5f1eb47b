use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::estado::{Processo, StatusProcesso};
use crate::audiencia::Audiencia;
use crate::documento::{Documento, FormatoDocumento};
use crate::tramite::Tramite;

/// Metadados de um documento anexado; o conteúdo fica de fora.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumoDocumento {
    pub id: Uuid,
    pub formato: FormatoDocumento,
    pub mime_type: String,
    pub tamanho: usize,
}

impl From<&Documento> for ResumoDocumento {
    fn from(doc: &Documento) -> Self {
        Self {
            id: doc.id(),
            formato: doc.tipo(),
            mime_type: doc.mime_type().to_string(),
            tamanho: doc.tamanho(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumoTramite {
    pub tipo: String,
    pub descricao: String,
    pub registrado_em: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documento: Option<ResumoDocumento>,
}

impl From<&Tramite> for ResumoTramite {
    fn from(tramite: &Tramite) -> Self {
        Self {
            tipo: tramite.tipo().to_string(),
            descricao: tramite.descricao().to_string(),
            registrado_em: tramite.registrado_em(),
            documento: tramite.documento_anexo().map(ResumoDocumento::from),
        }
    }
}

/// Fotografia serializável de um processo, pronta para exportação.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatorioProcesso {
    pub numero: String,
    pub assunto: String,
    pub status: StatusProcesso,
    pub data_encerramento: Option<DateTime<Utc>>,
    pub tramites: Vec<ResumoTramite>,
    pub audiencias: Vec<Audiencia>,
    pub total_observadores: usize,
    pub gerado_em: DateTime<Utc>,
}

impl RelatorioProcesso {
    pub fn from_processo(processo: &Processo) -> Self {
        Self {
            numero: processo.numero().to_string(),
            assunto: processo.assunto().to_string(),
            status: processo.status(),
            data_encerramento: processo.data_encerramento(),
            tramites: processo.tramites().iter().map(ResumoTramite::from).collect(),
            audiencias: processo.audiencias().to_vec(),
            total_observadores: processo.total_observadores(),
            gerado_em: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
