//! Ciclo de vida de processos judiciais.
//!
//! O [`Processo`] é uma máquina de estados (`Aberto` → `Encerrado`) que
//! guarda o histórico de [`Tramite`]s e as [`Audiencia`]s, e avisa de forma
//! síncrona cada [`Observador`] inscrito quando um trâmite entra no
//! histórico. Cada trâmite é também a fábrica do seu [`Documento`].
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sistema_juridico::{Advogado, Decisao, Juiz, Processo, StatusProcesso, Tramite};
//!
//! let mut processo = Processo::new("5002025.8.24.0038", "Danos Morais");
//! let advogado = Rc::new(RefCell::new(Advogado::new(
//!     "Dr. Silva", "123.456.789-00", "silva@law.com", "OAB/SC 12345",
//! )));
//! processo.anexar(&advogado);
//!
//! processo.adicionar_tramite(Tramite::new("Despacho", "Aguardando manifestação"))?;
//! assert_eq!(
//!     advogado.borrow().notificacoes(),
//!     ["Novo trâmite no processo 5002025.8.24.0038: Despacho"]
//! );
//!
//! let juiz = Juiz::new("Juiz Moro", "987.654.321-00", "moro@jus.br", "MAT-999", "Entrância Especial");
//! juiz.julgar(&mut processo, Decisao::new("Procedente", "O réu deve pagar indenização."))?;
//! assert_eq!(processo.status(), StatusProcesso::Encerrado);
//! # Ok::<(), sistema_juridico::ErroJuridico>(())
//! ```

pub mod audiencia;
pub mod cli;
pub mod config;
pub mod decisao;
pub mod demo;
pub mod documento;
pub mod error;
pub mod logging;
pub mod observador;
pub mod pessoas;
pub mod processo;
pub mod tramite;
pub mod ui;

pub use audiencia::{Audiencia, StatusAudiencia};
pub use decisao::Decisao;
pub use documento::{Documento, FormatoDocumento};
pub use error::{ErroJuridico, Result};
pub use observador::{Observador, RegistroTracing};
pub use pessoas::{Advogado, Juiz, Pessoa};
pub use processo::{Processo, RelatorioProcesso, StatusProcesso};
pub use tramite::{TIPO_JULGAMENTO, Tramite};
