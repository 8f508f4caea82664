// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring
// - domain: core models and their validation rules
// - application: ports, use cases, auth service
// - infrastructure: SQLite adapters
// - presentation: HTTP handlers and routing

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
