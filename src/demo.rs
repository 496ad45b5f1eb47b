use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::config::JuridicoConfig;
use crate::decisao::Decisao;
use crate::observador::RegistroTracing;
use crate::pessoas::{Advogado, Juiz};
use crate::processo::Processo;
use crate::tramite::Tramite;
use crate::ui::Painel;

/// Resultado do fluxo de demonstração.
pub struct Demonstracao {
    pub processo: Processo,
    pub advogado: Rc<RefCell<Advogado>>,
    pub registro: Rc<RefCell<RegistroTracing>>,
}

/// Conduz um processo do despacho inicial ao julgamento.
///
/// `painel` recebe o andamento de cada etapa quando presente.
pub fn executar(config: &JuridicoConfig, painel: Option<&Painel>) -> Result<Demonstracao> {
    let formato = config.formato()?.to_string();
    let etapa = |texto: &str| {
        if let Some(p) = painel {
            p.etapa(texto);
        }
    };

    let mut processo = Processo::new(config.numero_demo.as_str(), config.assunto_demo.as_str());
    let advogado = Rc::new(RefCell::new(Advogado::new(
        "Dr. Silva",
        "123.456.789-00",
        "silva@law.com",
        "OAB/SC 12345",
    )));
    let registro = Rc::new(RefCell::new(RegistroTracing::new()));
    processo.anexar(&advogado);
    processo.anexar(&registro);

    etapa("Petição inicial");
    let mut peticao = Tramite::new("Petição", "Petição inicial do autor");
    peticao.gerar_documento(&formato, "Petição inicial - conteúdo simulado")?;
    processo.adicionar_tramite(peticao)?;

    etapa("Despacho");
    processo.adicionar_tramite(Tramite::new("Despacho", "Aguardando manifestação"))?;

    etapa("Audiência");
    let data = NaiveDate::from_ymd_opt(2025, 12, 1)
        .and_then(|d| d.and_hms_opt(14, 0, 0))
        .ok_or_else(|| anyhow::anyhow!("data de audiência inválida"))?;
    let conciliacao = processo.agendar_audiencia(data, "Sala 1", "Conciliação")?.id();
    processo.realizar_audiencia(conciliacao)?;
    let instrucao = processo
        .agendar_audiencia(data + Duration::days(30), "Sala 2", "Instrução e julgamento")?
        .id();
    if let Some(p) = painel {
        p.audiencia(&format!("Conciliação em {data} realizada; instrução agendada"));
    }
    processo.cancelar_audiencia(instrucao)?;

    etapa("Julgamento");
    let juiz = Juiz::new(
        "Juiz Moro",
        "987.654.321-00",
        "moro@jus.br",
        "MAT-999",
        "Entrância Especial",
    );
    juiz.julgar(
        &mut processo,
        Decisao::new("Procedente", "O réu deve pagar indenização."),
    )?;

    Ok(Demonstracao {
        processo,
        advogado,
        registro,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audiencia::StatusAudiencia;
    use crate::documento::FormatoDocumento;
    use crate::processo::StatusProcesso;

    #[test]
    fn fluxo_completo_com_configuracao_padrao() {
        let demo = executar(&JuridicoConfig::default(), None).unwrap();
        let p = &demo.processo;

        assert_eq!(p.status(), StatusProcesso::Encerrado);
        assert_eq!(p.tramites().len(), 3);
        assert!(p.ultimo_tramite().unwrap().is_julgamento());
        assert_eq!(
            p.tramites()[0].documento_anexo().unwrap().tipo(),
            FormatoDocumento::Pdf
        );
        assert_eq!(p.audiencias()[0].status(), StatusAudiencia::Realizada);
        assert_eq!(p.audiencias()[1].status(), StatusAudiencia::Cancelada);

        assert_eq!(demo.advogado.borrow().notificacoes().len(), 3);
        assert_eq!(demo.registro.borrow().entregues(), 3);
    }

    #[test]
    fn formato_configurado_e_usado() {
        let config = JuridicoConfig {
            formato_padrao: "odt".into(),
            ..Default::default()
        };
        let demo = executar(&config, None).unwrap();
        let doc = demo.processo.tramites()[0].documento_anexo().unwrap();
        assert_eq!(doc.tipo(), FormatoDocumento::Odt);
    }
}
