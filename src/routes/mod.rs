/// Router Module Index
///
/// Splits the routing surface by access level so the bearer-token gate is
/// applied explicitly at the module boundary rather than per handler.

/// Routes open to any client: health check only.
pub mod public;

/// The product CRUD routes, all protected by the ApiToken middleware layer.
pub mod products;
