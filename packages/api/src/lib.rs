//! # API crate — fullstack server functions for the chamados tracker
//!
//! This crate is the boundary between the browser UI and the backend. It
//! defines every Dioxus server function the web frontend calls, along with
//! the server-only modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2id password hashing and the session key |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows (`User`, `Chamado`) and the client-safe `UserInfo` projection |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `sign_up`, `sign_in`, `sign_out`
//! - **Chamados**: `create_chamado`, `list_chamados`, `resolve_chamado`
//!
//! Every chamado function requires an authenticated session. User-facing
//! failure messages are Portuguese, matching the rest of the product.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use model::{ChamadoDraft, ChamadoInfo};
pub use models::UserInfo;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // A row with a role nothing recognizes is treated as signed out; the
    // next sign-in reports it.
    Ok(user.and_then(|u| u.to_info().ok()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account and open its session.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn sign_up(
    email: String,
    password: String,
    name: String,
    role: String,
    predio: Option<String>,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use model::{blank_to_none, Role};

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if name.is_empty() {
        return Err(ServerFnError::new("Nome é obrigatório"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("E-mail inválido"));
    }
    if password.chars().count() < 6 {
        return Err(ServerFnError::new(
            "A senha deve ter pelo menos 6 caracteres",
        ));
    }
    let Some(role) = Role::parse(&role) else {
        return Err(ServerFnError::new("Tipo de usuário inválido"));
    };
    // Only resolvers carry an assigned building.
    let predio = match role {
        Role::N2 => predio.as_deref().and_then(blank_to_none),
        Role::N1 => None,
    };
    if role == Role::N2 && predio.is_none() {
        return Err(ServerFnError::new("Selecione o prédio"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if the email is already taken
    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 AS n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("E-mail já está em uso"));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, role, predio, password_hash) VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(role.as_str())
    .bind(&predio)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let info = user
        .to_info()
        .map_err(|_| ServerFnError::new("Tipo de usuário inválido"))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(info)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn sign_up(
    email: String,
    password: String,
    name: String,
    role: String,
    predio: Option<String>,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Unknown email and wrong password answer the same way.
    let Some(user) = user else {
        return Err(ServerFnError::new("E-mail ou senha inválidos"));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("E-mail ou senha inválidos"));
    }

    let info = user
        .to_info()
        .map_err(|_| ServerFnError::new("Tipo de usuário inválido"))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(info)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Helper: the authenticated user's id from the session, or a failure that
/// tells the client to sign in.
#[cfg(feature = "server")]
async fn require_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Não autenticado"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// File a new chamado. The draft is validated again here; `criado_em` is
/// stamped by the database.
#[cfg(feature = "server")]
#[post("/api/chamados", session: tower_sessions::Session)]
pub async fn create_chamado(draft: ChamadoDraft) -> Result<ChamadoInfo, ServerFnError> {
    use crate::db::get_pool;
    use model::{blank_to_none, validate_chamado};

    let _user_id = require_user_id(&session).await?;

    let errors = validate_chamado(&draft);
    if let Some(message) = errors.first() {
        return Err(ServerFnError::new(message));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let chamado: models::Chamado = sqlx::query_as(
        "INSERT INTO chamados (titulo, solicitante, descricao, setor, sala, predio) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(draft.titulo.trim())
    .bind(draft.solicitante.trim())
    .bind(draft.descricao.trim())
    .bind(draft.setor.trim())
    .bind(blank_to_none(&draft.sala))
    .bind(draft.predio.trim())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(chamado.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/chamados")]
pub async fn create_chamado(draft: ChamadoDraft) -> Result<ChamadoInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the chamados of one building, newest first. An empty filter returns
/// an empty list without touching the database.
#[cfg(feature = "server")]
#[post("/api/chamados/list", session: tower_sessions::Session)]
pub async fn list_chamados(predio: String) -> Result<Vec<ChamadoInfo>, ServerFnError> {
    use crate::db::get_pool;
    use model::predio_filtrado;

    let _user_id = require_user_id(&session).await?;

    let predio = match predio_filtrado(&predio) {
        Ok(predio) => predio,
        Err(vazia) => return Ok(vazia),
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let chamados: Vec<models::Chamado> =
        sqlx::query_as("SELECT * FROM chamados WHERE predio = $1 ORDER BY criado_em DESC")
            .bind(&predio)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(chamados.iter().map(|c| c.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[post("/api/chamados/list")]
pub async fn list_chamados(predio: String) -> Result<Vec<ChamadoInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark a chamado resolved, stamping `resolvido_em`, and return the updated
/// record so the client can patch its list in place.
#[cfg(feature = "server")]
#[post("/api/chamados/resolve", session: tower_sessions::Session)]
pub async fn resolve_chamado(id: String) -> Result<ChamadoInfo, ServerFnError> {
    use crate::db::get_pool;

    let _user_id = require_user_id(&session).await?;

    let chamado_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let chamado: Option<models::Chamado> = sqlx::query_as(
        "UPDATE chamados SET resolvido = TRUE, resolvido_em = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(chamado_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(chamado) = chamado else {
        return Err(ServerFnError::new("Chamado não encontrado"));
    };

    Ok(chamado.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/chamados/resolve")]
pub async fn resolve_chamado(id: String) -> Result<ChamadoInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
