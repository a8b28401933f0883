//! Route handlers, one module per endpoint
//!
//! - index: `GET /` for both apps
//! - health: `GET /health` database liveness (SQL app)
//! - submit: `POST /api/submit` entry insert (SQL app)

pub mod health;
pub mod index;
pub mod submit;
