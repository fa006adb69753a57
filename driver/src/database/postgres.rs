use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnBookQuery, DependOnCartItemQuery};
use kernel::interface::update::DependOnCartItemModifier;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{book::*, cart::*};

mod book;
mod cart;

static POSTGRES_URL: &str = "POSTGRES_URL";

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    /// Connects to `POSTGRES_URL` and brings the schema up to date.
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&url)
            .await
            .convert_error()?;
        MIGRATOR
            .run(&pool)
            .await
            .change_context(KernelError::Persistence)
            .attach_printable("failed to apply migrations")?;
        tracing::info!("connected to postgres");
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DependOnCartItemQuery for PostgresDatabase {
    type CartItemQuery = PostgresCartItemRepository;
    fn cart_item_query(&self) -> &Self::CartItemQuery {
        &PostgresCartItemRepository
    }
}

impl DependOnCartItemModifier for PostgresDatabase {
    type CartItemModifier = PostgresCartItemRepository;
    fn cart_item_modifier(&self) -> &Self::CartItemModifier {
        &PostgresCartItemRepository
    }
}

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                // serialization_failure, deadlock_detected
                Error::Database(db) if matches!(db.code().as_deref(), Some("40001" | "40P01")) => {
                    KernelError::Concurrency
                }
                _ => KernelError::Persistence,
            };
            Report::from(error).change_context(context)
        })
    }
}
