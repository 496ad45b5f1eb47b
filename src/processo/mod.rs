mod estado;
mod relatorio;

pub use estado::{Processo, StatusProcesso};
pub use relatorio::{RelatorioProcesso, ResumoDocumento, ResumoTramite};
