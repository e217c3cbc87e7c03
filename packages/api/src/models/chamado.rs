//! Chamado row model (server only).
//!
//! The `chamados` columns use the same Portuguese vocabulary as the UI.
//! [`Chamado::to_info`] projects a row into the shared [`ChamadoInfo`],
//! turning the `Uuid` into a `String` and the timestamps into RFC 3339
//! strings so the record can cross to the WASM client.

use chrono::{DateTime, Utc};
use model::ChamadoInfo;
use sqlx::FromRow;
use uuid::Uuid;

/// Full chamado record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct Chamado {
    pub id: Uuid,
    pub titulo: String,
    pub solicitante: String,
    pub descricao: String,
    pub setor: String,
    pub sala: Option<String>,
    pub predio: String,
    pub criado_em: DateTime<Utc>,
    pub resolvido: bool,
    pub resolvido_em: Option<DateTime<Utc>>,
}

impl Chamado {
    /// Convert to ChamadoInfo for client consumption.
    pub fn to_info(&self) -> ChamadoInfo {
        ChamadoInfo {
            id: self.id.to_string(),
            titulo: self.titulo.clone(),
            solicitante: self.solicitante.clone(),
            descricao: self.descricao.clone(),
            setor: self.setor.clone(),
            sala: self.sala.clone(),
            predio: self.predio.clone(),
            criado_em: self.criado_em.to_rfc3339(),
            resolvido: self.resolvido,
            resolvido_em: self.resolvido_em.map(|t| t.to_rfc3339()),
        }
    }
}
