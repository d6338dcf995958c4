use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Shared server state handed to every handler
///
/// Holds the configuration, the embedded database handle and the JWT
/// service. All members are cheap to clone (`Surreal` is an internal Arc).
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT service (shared ownership)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Assemble state from already-initialized parts. Tests use this with an
    /// in-memory database; production code goes through [`Self::initialize`].
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize the server state:
    ///
    /// 1. Create the data directory layout
    /// 2. Open the embedded database at `data_dir/database/egas.db`
    /// 3. Construct the JWT service from config
    ///
    /// # Panics
    ///
    /// Panics when the data directory cannot be created or the database
    /// fails to open. There is nothing to serve without either.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_data_dir_structure()
            .expect("Failed to create data directory structure");

        let db_path = config.database_dir().join("egas.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self::new(config.clone(), db_service.db, jwt_service)
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
