//! Capacidade de notificação usada pelo [`Processo`](crate::processo::Processo).
//!
//! O processo depende só do trait [`Observador`]; advogados, outros
//! servidores ou sinks de log podem se inscrever da mesma forma.

/// Qualquer entidade que recebe avisos de movimentação processual.
pub trait Observador {
    /// Registra `mensagem` no log próprio do observador.
    fn notificar(&mut self, mensagem: &str);
}

/// Texto enviado aos observadores quando um trâmite é adicionado.
pub fn mensagem_novo_tramite(numero: &str, tipo: &str) -> String {
    format!("Novo trâmite no processo {numero}: {tipo}")
}

/// Observador que repassa cada aviso para o `tracing`.
#[derive(Debug, Default)]
pub struct RegistroTracing {
    entregues: usize,
}

impl RegistroTracing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantidade de avisos recebidos até agora.
    pub fn entregues(&self) -> usize {
        self.entregues
    }
}

impl Observador for RegistroTracing {
    fn notificar(&mut self, mensagem: &str) {
        self.entregues += 1;
        tracing::info!(target: "sistema_juridico::notificacao", "{mensagem}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formato_da_mensagem() {
        assert_eq!(
            mensagem_novo_tramite("5002025.8.24.0038", "Despacho"),
            "Novo trâmite no processo 5002025.8.24.0038: Despacho"
        );
    }

    #[test]
    fn registro_tracing_conta_entregas() {
        let mut registro = RegistroTracing::new();
        registro.notificar("a");
        registro.notificar("b");
        assert_eq!(registro.entregues(), 2);
    }
}
