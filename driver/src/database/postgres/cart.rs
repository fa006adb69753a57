use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::CartItemQuery;
use kernel::interface::update::CartItemModifier;
use kernel::prelude::entity::{
    BookAuthors, BookTitle, CartItem, CartItemId, CartItemPrice, CartItemQuantity, CreatedAt,
    ImageUrl, Isbn13,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresCartItemRepository;

#[async_trait::async_trait]
impl CartItemQuery for PostgresCartItemRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresTransaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        PgCartItemInternal::find_by_id_for_update(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<CartItem>, KernelError> {
        PgCartItemInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl CartItemModifier for PostgresCartItemRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        PgCartItemInternal::create(con, item).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        PgCartItemInternal::update(con, item).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        PgCartItemInternal::delete(con, id).await
    }

    async fn delete_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<u64, KernelError> {
        PgCartItemInternal::delete_all(con).await
    }
}

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: Uuid,
    title: String,
    authors: String,
    price: Option<f64>,
    quantity: i32,
    isbn13: i64,
    image_url: Option<String>,
    created_at: OffsetDateTime,
}

impl TryFrom<CartItemRow> for CartItem {
    type Error = Report<KernelError>;
    fn try_from(value: CartItemRow) -> Result<Self, Self::Error> {
        // The table forbids quantity < 1, so this only fails on a broken schema.
        let quantity = CartItemQuantity::new(value.quantity).map_err(|report| {
            report
                .change_context(KernelError::Persistence)
                .attach_printable(format!("stored cart item {} is corrupt", value.id))
        })?;
        Ok(CartItem::new(
            CartItemId::new(value.id),
            BookTitle::new(value.title),
            BookAuthors::new(value.authors),
            value.price.map(CartItemPrice::new),
            quantity,
            Isbn13::new(value.isbn13),
            value.image_url.map(ImageUrl::new),
            CreatedAt::new(value.created_at),
        ))
    }
}

pub(in crate::database) struct PgCartItemInternal;

impl PgCartItemInternal {
    async fn find_by_id_for_update(
        con: &mut PgConnection,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            // language=postgresql
            r#"
            SELECT id, title, authors, price, quantity, isbn13, image_url, created_at
            FROM cart_items
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(CartItem::try_from).transpose()
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<CartItem>, KernelError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            // language=postgresql
            r#"
            SELECT id, title, authors, price, quantity, isbn13, image_url, created_at
            FROM cart_items
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(CartItem::try_from).collect()
    }

    async fn create(con: &mut PgConnection, item: &CartItem) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO cart_items (id, title, authors, price, quantity, isbn13, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.title().as_ref())
        .bind(item.authors().as_ref())
        .bind(item.price().as_ref().map(|price| *price.as_ref()))
        .bind(item.quantity().as_ref())
        .bind(item.isbn13().as_ref())
        .bind(item.image_url().as_ref().map(|url| url.as_ref()))
        .bind(item.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, item: &CartItem) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE cart_items
            SET quantity = $2
            WHERE id = $1
            "#,
        )
        .bind(item.id().as_ref())
        .bind(item.quantity().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            // language=postgresql
            r#"
            DELETE FROM cart_items
            WHERE id = $1
            RETURNING id, title, authors, price, quantity, isbn13, image_url, created_at
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(CartItem::try_from).transpose()
    }

    async fn delete_all(con: &mut PgConnection) -> error_stack::Result<u64, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM cart_items
            "#,
        )
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected())
    }
}
