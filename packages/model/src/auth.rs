//! Form state and validation for the sign-in and sign-up screens.
//!
//! These rules run in the browser before any request is made, so a draft
//! that fails them never reaches the network. The server applies the same
//! rules again on sign-up; the messages here are the ones the forms show
//! inline under each field.

use crate::role::Role;

/// Sign-in form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Check a sign-in draft. Only shape is checked here; whether the
/// credentials match anything is the server's call.
pub fn validate_login(draft: &LoginDraft) -> LoginErrors {
    let mut errors = LoginErrors::default();
    if !draft.email.trim().contains('@') {
        errors.email = Some("E-mail inválido");
    }
    if draft.password.is_empty() {
        errors.password = Some("Informe a senha");
    }
    errors
}

/// Sign-up form state. `role` and `predio` hold the raw `<select>` values;
/// `predio` only matters when the role is resolver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: String,
    pub predio: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
    pub role: Option<&'static str>,
    pub predio: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm.is_none()
            && self.role.is_none()
            && self.predio.is_none()
    }
}

/// Check a sign-up draft. Passwords shorter than six characters are
/// rejected here, before the account request is ever sent.
pub fn validate_register(draft: &RegisterDraft) -> RegisterErrors {
    let mut errors = RegisterErrors::default();
    if draft.name.trim().is_empty() {
        errors.name = Some("Nome é obrigatório");
    }
    if !draft.email.trim().contains('@') {
        errors.email = Some("E-mail inválido");
    }
    if draft.password.is_empty() {
        errors.password = Some("Informe a senha");
    } else if draft.password.chars().count() < 6 {
        errors.password = Some("A senha deve ter pelo menos 6 caracteres");
    }
    if errors.password.is_none() && draft.confirm != draft.password {
        errors.confirm = Some("As senhas não coincidem");
    }
    match Role::parse(&draft.role) {
        None => errors.role = Some("Tipo de usuário inválido"),
        Some(Role::N2) => {
            if draft.predio.trim().is_empty() {
                errors.predio = Some("Selecione o prédio");
            }
        }
        Some(Role::N1) => {}
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_valido() -> RegisterDraft {
        RegisterDraft {
            name: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            password: "segredo".to_string(),
            confirm: "segredo".to_string(),
            role: "n1".to_string(),
            predio: String::new(),
        }
    }

    #[test]
    fn test_login_valid() {
        let draft = LoginDraft {
            email: "maria@example.com".to_string(),
            password: "segredo".to_string(),
        };
        assert!(validate_login(&draft).is_empty());
    }

    #[test]
    fn test_login_rejects_email_without_at_sign() {
        let draft = LoginDraft {
            email: "maria.example.com".to_string(),
            password: "segredo".to_string(),
        };
        assert_eq!(validate_login(&draft).email, Some("E-mail inválido"));
    }

    #[test]
    fn test_login_requires_password() {
        let draft = LoginDraft {
            email: "maria@example.com".to_string(),
            password: String::new(),
        };
        assert_eq!(validate_login(&draft).password, Some("Informe a senha"));
    }

    #[test]
    fn test_register_valid_n1_needs_no_predio() {
        assert!(validate_register(&register_valido()).is_empty());
    }

    #[test]
    fn test_register_valid_n2_with_predio() {
        let mut draft = register_valido();
        draft.role = "n2".to_string();
        draft.predio = "Adm".to_string();
        assert!(validate_register(&draft).is_empty());
    }

    #[test]
    fn test_short_password_rejected_before_any_request() {
        let mut draft = register_valido();
        draft.password = "12345".to_string();
        draft.confirm = "12345".to_string();
        assert_eq!(
            validate_register(&draft).password,
            Some("A senha deve ter pelo menos 6 caracteres")
        );
    }

    #[test]
    fn test_six_character_password_is_accepted() {
        let mut draft = register_valido();
        draft.password = "123456".to_string();
        draft.confirm = "123456".to_string();
        assert!(validate_register(&draft).is_empty());
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut draft = register_valido();
        draft.confirm = "outra coisa".to_string();
        assert_eq!(
            validate_register(&draft).confirm,
            Some("As senhas não coincidem")
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut draft = register_valido();
        draft.role = "admin".to_string();
        assert_eq!(
            validate_register(&draft).role,
            Some("Tipo de usuário inválido")
        );
    }

    #[test]
    fn test_n2_without_predio_rejected() {
        let mut draft = register_valido();
        draft.role = "n2".to_string();
        draft.predio = "  ".to_string();
        assert_eq!(validate_register(&draft).predio, Some("Selecione o prédio"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut draft = register_valido();
        draft.name = "   ".to_string();
        assert_eq!(validate_register(&draft).name, Some("Nome é obrigatório"));
    }
}
