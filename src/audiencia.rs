use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ErroJuridico, Result};

/// Situação de uma audiência: `Agendada` → `Realizada` | `Cancelada`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusAudiencia {
    Agendada,
    Realizada,
    Cancelada,
}

impl fmt::Display for StatusAudiencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusAudiencia::Agendada => write!(f, "Agendada"),
            StatusAudiencia::Realizada => write!(f, "Realizada"),
            StatusAudiencia::Cancelada => write!(f, "Cancelada"),
        }
    }
}

/// Audiência vinculada a um processo.
///
/// Criada apenas por [`Processo::agendar_audiencia`](crate::processo::Processo::agendar_audiencia).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audiencia {
    id: Uuid,
    data_hora: NaiveDateTime,
    local: String,
    finalidade: String,
    status: StatusAudiencia,
}

impl Audiencia {
    pub(crate) fn agendar(data_hora: NaiveDateTime, local: String, finalidade: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            data_hora,
            local,
            finalidade,
            status: StatusAudiencia::Agendada,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn data_hora(&self) -> NaiveDateTime {
        self.data_hora
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn finalidade(&self) -> &str {
        &self.finalidade
    }

    pub fn status(&self) -> StatusAudiencia {
        self.status
    }

    pub(crate) fn realizar(&mut self) -> Result<()> {
        self.avancar(StatusAudiencia::Realizada)
    }

    pub(crate) fn cancelar(&mut self) -> Result<()> {
        self.avancar(StatusAudiencia::Cancelada)
    }

    fn avancar(&mut self, proximo: StatusAudiencia) -> Result<()> {
        if self.status != StatusAudiencia::Agendada {
            return Err(ErroJuridico::EstadoInvalido(format!(
                "audiência {} está {}, não pode passar para {}",
                self.id, self.status, proximo
            )));
        }
        self.status = proximo;
        Ok(())
    }
}
