//! Erros do núcleo jurídico.
//!
//! Todas as operações de [`Processo`](crate::processo::Processo),
//! [`Tramite`](crate::tramite::Tramite) e [`Audiencia`](crate::audiencia::Audiencia)
//! validam as pré-condições antes de mutar qualquer estado, então um erro
//! nunca deixa a entidade parcialmente alterada.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ErroJuridico {
    /// Operação incompatível com o estado atual (processo encerrado,
    /// documento já anexado, audiência que não está mais agendada).
    #[error("Estado inválido: {0}")]
    EstadoInvalido(String),

    /// Tag de formato fora do conjunto reconhecido.
    #[error("Formato de documento não suportado: {0}")]
    FormatoNaoSuportado(String),

    #[error("Audiência não encontrada: {0}")]
    AudienciaNaoEncontrada(Uuid),
}

pub type Result<T> = std::result::Result<T, ErroJuridico>;
