use std::sync::Arc;

use driver::database::PostgresDatabase;
use kernel::KernelError;

/// State shared by every route. Cloning only bumps the reference count.
#[derive(Clone)]
pub struct AppModule {
    database: Arc<PostgresDatabase>,
}

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let database = PostgresDatabase::new().await?;
        Ok(Self {
            database: Arc::new(database),
        })
    }

    pub fn database(&self) -> &PostgresDatabase {
        &self.database
    }
}
