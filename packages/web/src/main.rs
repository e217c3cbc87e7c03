use dioxus::prelude::*;

use model::Role;
use ui::{AuthProvider, ToastProvider};
use views::{ListaChamados, Login, NovoChamado, Registro};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/registro")]
    Registro {},
    #[route("/novo-chamado")]
    NovoChamado {},
    #[route("/lista")]
    ListaChamados {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Where a freshly signed-in user lands: resolvers go straight to the
/// listing, requesters to the creation form.
fn route_for_role(role: Role) -> Route {
    match role {
        Role::N1 => Route::NovoChamado {},
        Role::N2 => Route::ListaChamados {},
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store and its backing table
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to run session store migration");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Serve the Dioxus application with the session layer on every route
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolvers_land_on_the_listing() {
        assert_eq!(route_for_role(Role::N2), Route::ListaChamados {});
    }

    #[test]
    fn test_requesters_land_on_the_creation_form() {
        assert_eq!(route_for_role(Role::N1), Route::NovoChamado {});
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login {}.to_string(), "/");
        assert_eq!(Route::Registro {}.to_string(), "/registro");
        assert_eq!(Route::NovoChamado {}.to_string(), "/novo-chamado");
        assert_eq!(Route::ListaChamados {}.to_string(), "/lista");
    }
}
