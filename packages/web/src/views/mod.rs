mod login;
pub use login::Login;

mod registro;
pub use registro::Registro;

mod novo_chamado;
pub use novo_chamado::NovoChamado;

mod lista_chamados;
pub use lista_chamados::ListaChamados;
