//! Atores que interagem com o processo: advogados (observadores) e juízes.

use crate::decisao::Decisao;
use crate::error::Result;
use crate::observador::Observador;
use crate::processo::Processo;
use crate::tramite::{TIPO_JULGAMENTO, Tramite};

/// Identificação comum a todo ator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pessoa {
    pub nome: String,
    /// CPF ou outro documento de identificação.
    pub documento_id: String,
    pub email: String,
}

impl Pessoa {
    pub fn new(
        nome: impl Into<String>,
        documento_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            nome: nome.into(),
            documento_id: documento_id.into(),
            email: email.into(),
        }
    }
}

/// Advogado: observador que acumula os avisos recebidos.
///
/// O log só cresce por [`Observador::notificar`]; não há como montá-lo de fora:
///
/// ```compile_fail
/// let _: sistema_juridico::Advogado = serde_json::from_str(
///     r#"{"pessoa":{"nome":"","documento_id":"","email":""},"registro":"","notificacoes":["falso"]}"#,
/// ).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Advogado {
    pub pessoa: Pessoa,
    /// Inscrição na OAB, ex.: "OAB/SC 12345".
    pub registro: String,
    notificacoes: Vec<String>,
}

impl Advogado {
    pub fn new(
        nome: impl Into<String>,
        documento_id: impl Into<String>,
        email: impl Into<String>,
        registro: impl Into<String>,
    ) -> Self {
        Self {
            pessoa: Pessoa::new(nome, documento_id, email),
            registro: registro.into(),
            notificacoes: Vec::new(),
        }
    }

    pub fn nome(&self) -> &str {
        &self.pessoa.nome
    }

    /// Avisos em ordem de chegada. Só cresce.
    pub fn notificacoes(&self) -> &[String] {
        &self.notificacoes
    }
}

impl Observador for Advogado {
    fn notificar(&mut self, mensagem: &str) {
        self.notificacoes.push(mensagem.to_string());
    }
}

/// Juiz: opera sobre o processo sem guardar estado dele.
#[derive(Debug, Clone)]
pub struct Juiz {
    pub pessoa: Pessoa,
    pub matricula: String,
    /// Entrância ou categoria funcional, ex.: "Entrância Especial".
    pub categoria: String,
}

impl Juiz {
    pub fn new(
        nome: impl Into<String>,
        documento_id: impl Into<String>,
        email: impl Into<String>,
        matricula: impl Into<String>,
        categoria: impl Into<String>,
    ) -> Self {
        Self {
            pessoa: Pessoa::new(nome, documento_id, email),
            matricula: matricula.into(),
            categoria: categoria.into(),
        }
    }

    pub fn nome(&self) -> &str {
        &self.pessoa.nome
    }

    /// Profere a decisão e encerra o processo.
    ///
    /// O trâmite de julgamento é adicionado (e notificado) antes do
    /// encerramento, ficando como último item do histórico. Falha com
    /// [`EstadoInvalido`](crate::error::ErroJuridico::EstadoInvalido) se o
    /// processo já estiver encerrado.
    pub fn julgar(&self, processo: &mut Processo, decisao: Decisao) -> Result<()> {
        let tramite = Tramite::new(TIPO_JULGAMENTO, decisao.descricao_julgamento());
        processo.registrar_julgamento(tramite)?;
        tracing::info!(
            processo = processo.numero(),
            juiz = %self.pessoa.nome,
            matricula = %self.matricula,
            resultado = %decisao.resultado,
            "processo julgado"
        );
        Ok(())
    }
}
