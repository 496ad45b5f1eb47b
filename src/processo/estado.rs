use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audiencia::Audiencia;
use crate::error::{ErroJuridico, Result};
use crate::observador::{Observador, mensagem_novo_tramite};
use crate::tramite::{TIPO_JULGAMENTO, Tramite};

/// Os dois estados do processo: `Aberto` → `Encerrado` (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusProcesso {
    Aberto,
    Encerrado,
}

impl fmt::Display for StatusProcesso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusProcesso::Aberto => write!(f, "Aberto"),
            StatusProcesso::Encerrado => write!(f, "Encerrado"),
        }
    }
}

/// Processo judicial: máquina de estados e sujeito das notificações.
///
/// Toda operação mutável passa pelo mesmo portão: com o processo
/// `Encerrado`, nada mais é aceito. As pré-condições são checadas antes
/// de qualquer alteração, então uma falha nunca deixa estado parcial.
///
/// Os observadores são mantidos como referências fracas; quem anexa
/// continua dono do observador e do seu log de notificações.
#[derive(Debug)]
pub struct Processo {
    numero: String,
    assunto: String,
    status: StatusProcesso,
    data_encerramento: Option<DateTime<Utc>>,
    tramites: Vec<Tramite>,
    audiencias: Vec<Audiencia>,
    observadores: Vec<Weak<RefCell<dyn Observador>>>,
}

impl Processo {
    pub fn new(numero: impl Into<String>, assunto: impl Into<String>) -> Self {
        Self {
            numero: numero.into(),
            assunto: assunto.into(),
            status: StatusProcesso::Aberto,
            data_encerramento: None,
            tramites: Vec::new(),
            audiencias: Vec::new(),
            observadores: Vec::new(),
        }
    }

    pub fn numero(&self) -> &str {
        &self.numero
    }

    pub fn assunto(&self) -> &str {
        &self.assunto
    }

    pub fn status(&self) -> StatusProcesso {
        self.status
    }

    pub fn is_encerrado(&self) -> bool {
        self.status == StatusProcesso::Encerrado
    }

    pub fn data_encerramento(&self) -> Option<DateTime<Utc>> {
        self.data_encerramento
    }

    /// Histórico em ordem de inserção; nunca reordenado nem truncado.
    pub fn tramites(&self) -> &[Tramite] {
        &self.tramites
    }

    pub fn ultimo_tramite(&self) -> Option<&Tramite> {
        self.tramites.last()
    }

    pub fn audiencias(&self) -> &[Audiencia] {
        &self.audiencias
    }

    /// Observadores ainda vivos.
    pub fn total_observadores(&self) -> usize {
        self.observadores
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    /// Inscreve um observador para os próximos avisos.
    ///
    /// Não há deduplicação: anexar duas vezes gera dois avisos por trâmite.
    pub fn anexar<O: Observador + 'static>(&mut self, observador: &Rc<RefCell<O>>) {
        let observador: Rc<RefCell<dyn Observador>> = observador.clone();
        self.anexar_dyn(&observador);
    }

    /// Mesma inscrição de [`anexar`](Self::anexar), para observadores já apagados em `dyn`.
    pub fn anexar_dyn(&mut self, observador: &Rc<RefCell<dyn Observador>>) {
        self.observadores.push(Rc::downgrade(observador));
        tracing::debug!(
            processo = %self.numero,
            total = self.observadores.len(),
            "observador anexado"
        );
    }

    /// Acrescenta um trâmite ao histórico e avisa todos os observadores,
    /// na ordem de inscrição, antes de retornar.
    ///
    /// Trâmites de julgamento só entram via [`Juiz::julgar`](crate::pessoas::Juiz::julgar).
    pub fn adicionar_tramite(&mut self, tramite: Tramite) -> Result<()> {
        self.garantir_aberto("adicionar trâmite")?;
        if tramite.tipo() == TIPO_JULGAMENTO {
            return Err(ErroJuridico::EstadoInvalido(format!(
                "processo {}: trâmite de julgamento exige decisão de um juiz",
                self.numero
            )));
        }
        self.acrescentar(tramite);
        Ok(())
    }

    fn acrescentar(&mut self, tramite: Tramite) {
        let mensagem = mensagem_novo_tramite(&self.numero, tramite.tipo());
        tracing::debug!(processo = %self.numero, tipo = tramite.tipo(), "trâmite adicionado");
        self.tramites.push(tramite);
        self.notificar_observadores(&mensagem);
    }

    /// Agenda uma audiência. Não gera aviso aos observadores.
    pub fn agendar_audiencia(
        &mut self,
        data_hora: NaiveDateTime,
        local: impl Into<String>,
        finalidade: impl Into<String>,
    ) -> Result<&Audiencia> {
        self.garantir_aberto("agendar audiência")?;

        let audiencia = Audiencia::agendar(data_hora, local.into(), finalidade.into());
        tracing::info!(
            processo = %self.numero,
            audiencia = %audiencia.id(),
            data_hora = %data_hora,
            "audiência agendada"
        );
        let posicao = self.audiencias.len();
        self.audiencias.push(audiencia);
        Ok(&self.audiencias[posicao])
    }

    pub fn realizar_audiencia(&mut self, id: Uuid) -> Result<&Audiencia> {
        self.garantir_aberto("realizar audiência")?;
        let audiencia = self.audiencia_mut(id)?;
        audiencia.realizar()?;
        Ok(&*audiencia)
    }

    pub fn cancelar_audiencia(&mut self, id: Uuid) -> Result<&Audiencia> {
        self.garantir_aberto("cancelar audiência")?;
        let audiencia = self.audiencia_mut(id)?;
        audiencia.cancelar()?;
        Ok(&*audiencia)
    }

    /// Encerramento administrativo: muda o status e carimba a data,
    /// sem acrescentar trâmite.
    pub fn encerrar_processo(&mut self) -> Result<()> {
        self.garantir_aberto("encerrar processo")?;
        self.fechar();
        Ok(())
    }

    /// Caminho do julgamento: o trâmite de fechamento entra no histórico
    /// (e é notificado) antes da transição para `Encerrado`.
    pub(crate) fn registrar_julgamento(&mut self, tramite: Tramite) -> Result<()> {
        self.garantir_aberto("julgar")?;
        self.acrescentar(tramite);
        self.fechar();
        Ok(())
    }

    fn fechar(&mut self) {
        let agora = Utc::now();
        self.status = StatusProcesso::Encerrado;
        self.data_encerramento = Some(agora);
        tracing::info!(processo = %self.numero, encerrado_em = %agora, "processo encerrado");
    }

    fn garantir_aberto(&self, operacao: &str) -> Result<()> {
        if self.is_encerrado() {
            return Err(ErroJuridico::EstadoInvalido(format!(
                "processo {} está encerrado; operação '{operacao}' não permitida",
                self.numero
            )));
        }
        Ok(())
    }

    fn audiencia_mut(&mut self, id: Uuid) -> Result<&mut Audiencia> {
        self.audiencias
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(ErroJuridico::AudienciaNaoEncontrada(id))
    }

    // Entrega best-effort: observador descartado ou já emprestado é pulado.
    fn notificar_observadores(&self, mensagem: &str) {
        for (posicao, registro) in self.observadores.iter().enumerate() {
            let Some(observador) = registro.upgrade() else {
                tracing::warn!(processo = %self.numero, posicao, "observador descartado; aviso ignorado");
                continue;
            };
            match observador.try_borrow_mut() {
                Ok(mut observador) => {
                    observador.notificar(mensagem);
                    tracing::debug!(processo = %self.numero, posicao, "aviso entregue");
                }
                Err(_) => {
                    tracing::warn!(processo = %self.numero, posicao, "observador ocupado; aviso ignorado");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::audiencia::StatusAudiencia;
    use crate::tramite::TIPO_JULGAMENTO;

    #[derive(Default)]
    struct Caderno {
        mensagens: Vec<String>,
    }

    impl Observador for Caderno {
        fn notificar(&mut self, mensagem: &str) {
            self.mensagens.push(mensagem.to_string());
        }
    }

    fn processo() -> Processo {
        Processo::new("5002025.8.24.0038", "Danos Morais")
    }

    fn caderno() -> Rc<RefCell<Caderno>> {
        Rc::new(RefCell::new(Caderno::default()))
    }

    fn data() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test]
    fn processo_nasce_aberto_e_vazio() {
        let p = processo();
        assert_eq!(p.status(), StatusProcesso::Aberto);
        assert!(p.data_encerramento().is_none());
        assert!(p.tramites().is_empty());
        assert!(p.audiencias().is_empty());
        assert_eq!(p.total_observadores(), 0);
    }

    #[test]
    fn tramite_notifica_observadores_em_ordem() {
        let mut p = processo();
        let a = caderno();
        let b = caderno();
        p.anexar(&a);
        p.anexar(&b);

        p.adicionar_tramite(Tramite::new("Despacho", "Aguardando manifestação"))
            .unwrap();
        p.adicionar_tramite(Tramite::new("Petição", "Réplica")).unwrap();

        let esperado = vec![
            "Novo trâmite no processo 5002025.8.24.0038: Despacho".to_string(),
            "Novo trâmite no processo 5002025.8.24.0038: Petição".to_string(),
        ];
        assert_eq!(a.borrow().mensagens, esperado);
        assert_eq!(b.borrow().mensagens, esperado);
        assert_eq!(p.tramites().len(), 2);
    }

    #[test]
    fn anexar_duas_vezes_duplica_aviso() {
        let mut p = processo();
        let a = caderno();
        p.anexar(&a);
        p.anexar(&a);

        p.adicionar_tramite(Tramite::new("Despacho", "Cite-se")).unwrap();
        assert_eq!(a.borrow().mensagens.len(), 2);
    }

    #[test]
    fn observador_descartado_e_ignorado() {
        let mut p = processo();
        let vivo = caderno();
        {
            let temporario = caderno();
            p.anexar(&temporario);
        }
        p.anexar(&vivo);
        assert_eq!(p.total_observadores(), 1);

        p.adicionar_tramite(Tramite::new("Despacho", "Cite-se")).unwrap();
        assert_eq!(vivo.borrow().mensagens.len(), 1);
        assert_eq!(p.tramites().len(), 1);
    }

    #[test]
    fn observador_emprestado_nao_corrompe_processo() {
        let mut p = processo();
        let ocupado = caderno();
        let livre = caderno();
        p.anexar(&ocupado);
        p.anexar(&livre);

        let emprestimo = ocupado.borrow();
        p.adicionar_tramite(Tramite::new("Despacho", "Cite-se")).unwrap();

        assert_eq!(p.tramites().len(), 1);
        assert_eq!(livre.borrow().mensagens.len(), 1);
        assert!(emprestimo.mensagens.is_empty());
    }

    #[test]
    fn agendar_audiencia_sem_notificar() {
        let mut p = processo();
        let a = caderno();
        p.anexar(&a);

        let audiencia = p.agendar_audiencia(data(), "Sala 1", "Conciliação").unwrap().clone();
        assert_eq!(audiencia.status(), StatusAudiencia::Agendada);
        assert!(p.audiencias().contains(&audiencia));
        assert!(a.borrow().mensagens.is_empty());
    }

    #[test]
    fn realizar_e_cancelar_audiencia() {
        let mut p = processo();
        let primeira = p.agendar_audiencia(data(), "Sala 1", "Conciliação").unwrap().id();
        let segunda = p.agendar_audiencia(data(), "Sala 2", "Instrução").unwrap().id();

        let realizada = p.realizar_audiencia(primeira).unwrap();
        assert_eq!(realizada.status(), StatusAudiencia::Realizada);
        let cancelada = p.cancelar_audiencia(segunda).unwrap();
        assert_eq!(cancelada.status(), StatusAudiencia::Cancelada);

        assert!(matches!(
            p.realizar_audiencia(primeira),
            Err(ErroJuridico::EstadoInvalido(_))
        ));
    }

    #[test]
    fn audiencia_desconhecida() {
        let mut p = processo();
        let id = Uuid::new_v4();
        assert!(matches!(
            p.cancelar_audiencia(id),
            Err(ErroJuridico::AudienciaNaoEncontrada(x)) if x == id
        ));
    }

    #[test]
    fn encerrar_carimba_data_sem_tramite() {
        let mut p = processo();
        p.encerrar_processo().unwrap();
        assert_eq!(p.status(), StatusProcesso::Encerrado);
        assert!(p.data_encerramento().is_some());
        assert!(p.tramites().is_empty());
    }

    #[test]
    fn encerrar_duas_vezes_falha_sem_alterar_estado() {
        let mut p = processo();
        p.adicionar_tramite(Tramite::new("Despacho", "Conclusos")).unwrap();
        p.encerrar_processo().unwrap();
        let data = p.data_encerramento();

        let err = p.encerrar_processo().unwrap_err();
        assert!(matches!(err, ErroJuridico::EstadoInvalido(_)));
        assert_eq!(p.status(), StatusProcesso::Encerrado);
        assert_eq!(p.data_encerramento(), data);
        assert_eq!(p.tramites().len(), 1);
    }

    #[test]
    fn status_forcado_bloqueia_encerramento() {
        let mut p = processo();
        p.status = StatusProcesso::Encerrado;
        assert!(matches!(
            p.encerrar_processo(),
            Err(ErroJuridico::EstadoInvalido(_))
        ));
    }

    #[test]
    fn processo_encerrado_rejeita_mutacoes() {
        let mut p = processo();
        let id = p.agendar_audiencia(data(), "Sala 1", "Conciliação").unwrap().id();
        let a = caderno();
        p.anexar(&a);
        p.encerrar_processo().unwrap();

        assert!(p.adicionar_tramite(Tramite::new("Petição", "Tardia")).is_err());
        assert!(p.agendar_audiencia(data(), "Sala 2", "Instrução").is_err());
        assert!(p.realizar_audiencia(id).is_err());
        assert!(p.tramites().is_empty());
        assert_eq!(p.audiencias().len(), 1);
        assert!(a.borrow().mensagens.is_empty());
    }

    #[test]
    fn julgamento_entra_por_ultimo_e_notifica() {
        let mut p = processo();
        let a = caderno();
        p.anexar(&a);
        p.adicionar_tramite(Tramite::new("Despacho", "Conclusos")).unwrap();

        p.registrar_julgamento(Tramite::new(TIPO_JULGAMENTO, "Decisão: Procedente"))
            .unwrap();

        assert!(p.is_encerrado());
        assert!(p.ultimo_tramite().unwrap().is_julgamento());
        assert_eq!(
            a.borrow().mensagens.last().unwrap(),
            "Novo trâmite no processo 5002025.8.24.0038: Julgamento"
        );

        let err = p
            .registrar_julgamento(Tramite::new(TIPO_JULGAMENTO, "Decisão: Improcedente"))
            .unwrap_err();
        assert!(matches!(err, ErroJuridico::EstadoInvalido(_)));
        assert_eq!(p.tramites().len(), 2);
    }

    #[test]
    fn julgamento_avulso_e_rejeitado() {
        let mut p = processo();
        let a = caderno();
        p.anexar(&a);

        let err = p
            .adicionar_tramite(Tramite::new(TIPO_JULGAMENTO, "Decisão: Procedente"))
            .unwrap_err();

        assert!(matches!(err, ErroJuridico::EstadoInvalido(_)));
        assert_eq!(p.status(), StatusProcesso::Aberto);
        assert!(p.tramites().is_empty());
        assert!(a.borrow().mensagens.is_empty());
    }

    #[test]
    fn anexar_observador_dyn() {
        let mut p = processo();
        let concreto = caderno();
        let apagado: Rc<RefCell<dyn Observador>> = concreto.clone();
        p.anexar_dyn(&apagado);
        assert_eq!(p.total_observadores(), 1);

        p.adicionar_tramite(Tramite::new("Despacho", "Cite-se")).unwrap();
        assert_eq!(concreto.borrow().mensagens.len(), 1);
    }

    #[test]
    fn status_display() {
        assert_eq!(StatusProcesso::Aberto.to_string(), "Aberto");
        assert_eq!(StatusProcesso::Encerrado.to_string(), "Encerrado");
    }
}
