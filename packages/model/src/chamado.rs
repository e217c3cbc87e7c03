//! # Chamado records and the creation-form rules
//!
//! A chamado's fields carry the product's Portuguese vocabulary (`titulo`,
//! `solicitante`, `descricao`, `setor`, `sala`, `predio`). Two shapes exist:
//!
//! - [`ChamadoInfo`] — the record as the client sees it. Ids and timestamps
//!   are plain `String`s (RFC 3339 for timestamps) so the type crosses the
//!   server/client boundary without `uuid` or `chrono` on WASM.
//! - [`ChamadoDraft`] — the creation form's state, validated by
//!   [`validate_chamado`] into per-field messages before it is submitted and
//!   again on the server before the insert.
//!
//! The small helpers at the bottom back the listing screen:
//! [`apply_resolution`] patches a freshly-resolved record into the displayed
//! list, [`predio_filtrado`] resolves the building filter (a blank filter is
//! an empty listing, fetched from nowhere), [`format_timestamp_br`] renders
//! an RFC 3339 timestamp the way the product displays dates
//! (`dd/MM/yyyy HH:mm`, on the viewer's clock in the browser), and
//! [`blank_to_none`] normalizes optional fields (a blank `sala` is stored as
//! absent, not as an empty string).

use serde::{Deserialize, Serialize};

/// A chamado as stored and listed. Safe to send to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChamadoInfo {
    pub id: String,
    pub titulo: String,
    pub solicitante: String,
    pub descricao: String,
    pub setor: String,
    pub sala: Option<String>,
    pub predio: String,
    /// Creation timestamp, RFC 3339.
    pub criado_em: String,
    pub resolvido: bool,
    /// Resolution timestamp, RFC 3339. Set once, when resolved.
    pub resolvido_em: Option<String>,
}

/// Form state for the creation screen. `sala` is the only optional field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChamadoDraft {
    pub predio: String,
    pub titulo: String,
    pub solicitante: String,
    pub descricao: String,
    pub setor: String,
    pub sala: String,
}

/// Per-field validation messages for [`ChamadoDraft`]. `None` means the
/// field is fine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChamadoErrors {
    pub predio: Option<&'static str>,
    pub titulo: Option<&'static str>,
    pub solicitante: Option<&'static str>,
    pub descricao: Option<&'static str>,
    pub setor: Option<&'static str>,
}

impl ChamadoErrors {
    pub fn is_empty(&self) -> bool {
        self.predio.is_none()
            && self.titulo.is_none()
            && self.solicitante.is_none()
            && self.descricao.is_none()
            && self.setor.is_none()
    }

    /// First populated message, in field order. The server reports this one
    /// when a draft that dodged the client-side checks reaches it.
    pub fn first(&self) -> Option<&'static str> {
        self.predio
            .or(self.titulo)
            .or(self.solicitante)
            .or(self.descricao)
            .or(self.setor)
    }
}

/// Check a creation draft. Required fields must be non-blank; `sala` is free.
pub fn validate_chamado(draft: &ChamadoDraft) -> ChamadoErrors {
    let mut errors = ChamadoErrors::default();
    if draft.predio.trim().is_empty() {
        errors.predio = Some("Selecione o prédio");
    }
    if draft.titulo.trim().is_empty() {
        errors.titulo = Some("Chamado é obrigatório");
    }
    if draft.solicitante.trim().is_empty() {
        errors.solicitante = Some("Solicitante é obrigatório");
    }
    if draft.descricao.trim().is_empty() {
        errors.descricao = Some("Descrição é obrigatória");
    }
    if draft.setor.trim().is_empty() {
        errors.setor = Some("Setor é obrigatório");
    }
    errors
}

/// Trimmed value, or `None` when blank.
pub fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve the listing screen's building filter. A blank filter is already
/// the whole answer: `Err` carries the empty listing it yields, shown (and
/// served) without any query; `Ok` carries the building to fetch.
pub fn predio_filtrado(filtro: &str) -> Result<String, Vec<ChamadoInfo>> {
    match blank_to_none(filtro) {
        Some(predio) => Ok(predio),
        None => Err(Vec::new()),
    }
}

/// Replace the stale copy of a freshly-resolved chamado in a displayed list.
/// Returns whether a record with the same id was found. Other records are
/// untouched, so the screen reflects the resolution immediately without a
/// refetch.
pub fn apply_resolution(chamados: &mut [ChamadoInfo], atualizado: &ChamadoInfo) -> bool {
    for chamado in chamados.iter_mut() {
        if chamado.id == atualizado.id {
            *chamado = atualizado.clone();
            return true;
        }
    }
    false
}

/// Render an RFC 3339 timestamp as `dd/MM/yyyy HH:mm`, the Brazilian
/// date format the screens display, on the viewer's clock. The server-side
/// render keeps the UTC wall clock; the browser pass replaces it with local
/// time. Malformed input is returned unchanged rather than dropped.
pub fn format_timestamp_br(rfc3339: &str) -> String {
    if let Some(local) = local_timestamp(rfc3339) {
        return local;
    }
    utc_timestamp(rfc3339).unwrap_or_else(|| rfc3339.to_string())
}

/// The timestamp on the browser's clock, `None` when it does not parse.
#[cfg(target_arch = "wasm32")]
fn local_timestamp(rfc3339: &str) -> Option<String> {
    let ms = js_sys::Date::parse(rfc3339);
    if ms.is_nan() {
        return None;
    }
    let date = js_sys::Date::new_0();
    date.set_time(ms);
    Some(format_parts(
        date.get_date(),
        date.get_month() + 1,
        date.get_full_year(),
        date.get_hours(),
        date.get_minutes(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn local_timestamp(_rfc3339: &str) -> Option<String> {
    None
}

/// UTC wall clock read straight from the string.
fn utc_timestamp(rfc3339: &str) -> Option<String> {
    let (date, time) = rfc3339.split_once('T')?;
    let mut parts = date.splitn(3, '-');
    let ano: u32 = parts.next()?.parse().ok()?;
    let mes: u32 = parts.next()?.parse().ok()?;
    let dia: u32 = parts.next()?.parse().ok()?;
    let hora: u32 = time.get(0..2)?.parse().ok()?;
    let minuto: u32 = time.get(3..5)?.parse().ok()?;
    Some(format_parts(dia, mes, ano, hora, minuto))
}

fn format_parts(dia: u32, mes: u32, ano: u32, hora: u32, minuto: u32) -> String {
    format!("{dia:02}/{mes:02}/{ano:04} {hora:02}:{minuto:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_valido() -> ChamadoDraft {
        ChamadoDraft {
            predio: "Adm".to_string(),
            titulo: "Impressora sem toner".to_string(),
            solicitante: "Maria".to_string(),
            descricao: "Impressora do 2º andar parou".to_string(),
            setor: "RH".to_string(),
            sala: String::new(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate_chamado(&draft_valido());
        assert!(errors.is_empty());
        assert_eq!(errors.first(), None);
    }

    #[test]
    fn test_sala_is_optional() {
        let mut draft = draft_valido();
        draft.sala = String::new();
        assert!(validate_chamado(&draft).is_empty());
        draft.sala = "204".to_string();
        assert!(validate_chamado(&draft).is_empty());
    }

    #[test]
    fn test_each_required_field_reports_its_own_message() {
        let mut draft = draft_valido();
        draft.predio = String::new();
        assert_eq!(validate_chamado(&draft).predio, Some("Selecione o prédio"));

        let mut draft = draft_valido();
        draft.titulo = "   ".to_string();
        assert_eq!(validate_chamado(&draft).titulo, Some("Chamado é obrigatório"));

        let mut draft = draft_valido();
        draft.solicitante = String::new();
        assert_eq!(
            validate_chamado(&draft).solicitante,
            Some("Solicitante é obrigatório")
        );

        let mut draft = draft_valido();
        draft.descricao = String::new();
        assert_eq!(
            validate_chamado(&draft).descricao,
            Some("Descrição é obrigatória")
        );

        let mut draft = draft_valido();
        draft.setor = String::new();
        assert_eq!(validate_chamado(&draft).setor, Some("Setor é obrigatório"));
    }

    #[test]
    fn test_first_reports_fields_in_form_order() {
        let errors = validate_chamado(&ChamadoDraft::default());
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), Some("Selecione o prédio"));
    }

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none(""), None);
        assert_eq!(blank_to_none("   "), None);
        assert_eq!(blank_to_none(" 204 "), Some("204".to_string()));
    }

    #[test]
    fn test_blank_building_filter_yields_an_empty_listing() {
        let vazia = predio_filtrado("").unwrap_err();
        assert!(vazia.is_empty(), "a blank filter never reaches the server");
        assert!(predio_filtrado("   ").is_err());
        assert_eq!(predio_filtrado(" Adm "), Ok("Adm".to_string()));
    }

    fn info(id: &str, resolvido: bool) -> ChamadoInfo {
        ChamadoInfo {
            id: id.to_string(),
            titulo: "Chamado".to_string(),
            solicitante: "Maria".to_string(),
            descricao: "Descrição".to_string(),
            setor: "RH".to_string(),
            sala: None,
            predio: "Adm".to_string(),
            criado_em: "2025-03-10T12:00:00Z".to_string(),
            resolvido,
            resolvido_em: resolvido.then(|| "2025-03-11T09:30:00Z".to_string()),
        }
    }

    #[test]
    fn test_apply_resolution_patches_the_matching_record() {
        let mut lista = vec![info("a", false), info("b", false)];
        let atualizado = info("b", true);

        assert!(apply_resolution(&mut lista, &atualizado));

        assert!(!lista[0].resolvido, "other records must be untouched");
        assert!(lista[1].resolvido);
        assert_eq!(
            lista[1].resolvido_em.as_deref(),
            Some("2025-03-11T09:30:00Z"),
            "the resolution timestamp must show up in the displayed list"
        );
    }

    #[test]
    fn test_apply_resolution_unknown_id_is_a_no_op() {
        let mut lista = vec![info("a", false)];
        let atualizado = info("z", true);

        assert!(!apply_resolution(&mut lista, &atualizado));
        assert!(!lista[0].resolvido);
    }

    #[test]
    fn test_format_timestamp_br() {
        assert_eq!(
            format_timestamp_br("2025-03-11T09:30:00Z"),
            "11/03/2025 09:30"
        );
        assert_eq!(
            format_timestamp_br("2025-12-01T23:05:59.123456+00:00"),
            "01/12/2025 23:05"
        );
    }

    #[test]
    fn test_format_timestamp_br_keeps_malformed_input() {
        assert_eq!(format_timestamp_br(""), "");
        assert_eq!(format_timestamp_br("ontem"), "ontem");
        assert_eq!(format_timestamp_br("2025-03-11"), "2025-03-11");
    }

    #[test]
    fn test_timestamp_components_are_zero_padded() {
        // The browser path rebuilds the text from numeric components; a
        // 9 must come out as "09" just like in the stored string.
        assert_eq!(format_parts(9, 3, 2025, 7, 5), "09/03/2025 07:05");
    }
}
