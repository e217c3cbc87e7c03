//! Buildings served by the helpdesk.

/// The buildings a chamado can be filed against. Both the creation screen and
/// the listing filter offer exactly this list; resolvers are assigned one of
/// these at registration.
pub const PREDIOS: [&str; 5] = ["Adm", "Cível", "Palácio", "Criminal", "Cidadania"];
