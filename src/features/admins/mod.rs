//! Admin directory feature.
//!
//! Admin rights are granted per email address. The directory is seeded
//! with a primary admin that can never be removed; every other entry is
//! managed through the endpoints below.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admins` | Admin | List admins |
//! | POST | `/api/admins` | Admin | Grant admin access |
//! | DELETE | `/api/admins/{email}` | Admin | Revoke admin access |
//! | GET | `/api/admins/me` | Yes | Admin status of the caller |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AdminService;
