//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the personnel dashboard: API endpoints,
//! business logic, data access and infrastructure. The backend uses Axum as the web
//! framework, SeaORM for database operations and stateless bearer tokens for
//! authentication.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, auditing and token handling
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token verification and role gates
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations and admin bootstrap
//! - **Seed** (`seed`) - Demo data set loaded by the `seed` binary
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Parsing, password hashing, search and client address helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** verifies the bearer token and any role requirement
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** executes business logic and records audit entries
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
