/// Decisão judicial: resultado e texto integral.
///
/// Consumida uma única vez por [`Juiz::julgar`](crate::pessoas::Juiz::julgar),
/// que a converte no trâmite de julgamento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decisao {
    pub resultado: String,
    pub texto_integral: String,
}

impl Decisao {
    pub fn new(resultado: impl Into<String>, texto_integral: impl Into<String>) -> Self {
        Self {
            resultado: resultado.into(),
            texto_integral: texto_integral.into(),
        }
    }

    /// Descrição usada no trâmite de julgamento.
    pub fn descricao_julgamento(&self) -> String {
        format!("Decisão: {} - {}", self.resultado, self.texto_integral)
    }
}
