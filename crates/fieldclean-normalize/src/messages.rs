//! Reason strings written to the `_sugestao` columns.

pub const INVALID_FORMAT: &str = "Formato inválido";
pub const MISSING_VALUE: &str = "Valor ausente";

pub fn name_too_short(value: &str) -> String {
    format!("Nome muito curto ({value})")
}
