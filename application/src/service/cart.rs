use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{CartItemQuery, DependOnCartItemQuery};
use kernel::interface::update::{CartItemModifier, DependOnCartItemModifier};
use kernel::prelude::entity::{
    BookAuthors, BookTitle, CartItem, CartItemDecrement, CartItemId, CartItemPrice,
    CartItemQuantity, CreatedAt, ImageUrl, Isbn13,
};
use kernel::KernelError;

use crate::transfer::{
    CartItemDto, ClearedCartDto, CreateCartItemDto, DecrementCartItemDto, DecrementedCartItemDto,
    RemoveCartItemDto,
};

fn required_text(field: &'static str, value: String) -> error_stack::Result<String, KernelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(
            Report::new(KernelError::Validation).attach_printable(format!("{field} is required"))
        );
    }
    Ok(trimmed.to_string())
}

fn build_cart_item(dto: CreateCartItemDto) -> error_stack::Result<CartItem, KernelError> {
    let title = required_text("title", dto.title)?;
    let authors = required_text("authors", dto.authors)?;

    let isbn13 = Isbn13::new(dto.isbn13);
    if !isbn13.is_thirteen_digits() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("isbn13 must have 13 digits, got {}", dto.isbn13)));
    }

    let price = match dto.price {
        Some(price) if !price.is_finite() || price < 0.0 => {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("price must be a non-negative number, got {price}")));
        }
        price => price.map(CartItemPrice::new),
    };

    let quantity = match dto.quantity {
        Some(quantity) => CartItemQuantity::new(quantity)?,
        None => CartItemQuantity::default(),
    };

    let image_url = dto
        .image_url
        .filter(|url| !url.trim().is_empty())
        .map(ImageUrl::new);

    Ok(CartItem::new(
        CartItemId::new(Uuid::new_v4()),
        BookTitle::new(title),
        BookAuthors::new(authors),
        price,
        quantity,
        isbn13,
        image_url,
        CreatedAt::now(),
    ))
}

#[async_trait::async_trait]
pub trait AddCartItemService: 'static + Sync + Send + DependOnCartItemModifier {
    async fn add_cart_item(
        &self,
        dto: CreateCartItemDto,
    ) -> error_stack::Result<CartItemDto, KernelError> {
        let item = build_cart_item(dto)?;

        let mut connection = self.database_connection().transact().await?;
        self.cart_item_modifier()
            .create(&mut connection, &item)
            .await?;
        connection.commit().await?;

        tracing::debug!(id = %item.id().as_ref(), "cart item created");
        Ok(CartItemDto::from(item))
    }
}

impl<T> AddCartItemService for T where T: DependOnCartItemModifier {}

/// Takes one copy of an item out of the cart, removing the item once its
/// last copy is gone. The item row stays locked between the read and the
/// write, so concurrent calls never lose a decrement.
#[async_trait::async_trait]
pub trait DecrementCartItemService:
    'static + Sync + Send + DependOnCartItemQuery + DependOnCartItemModifier
{
    async fn decrement_cart_item(
        &self,
        dto: DecrementCartItemDto,
    ) -> error_stack::Result<DecrementedCartItemDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CartItemId::new(dto.id);
        let item = self
            .cart_item_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("no cart item with id {}", dto.id))
            })?;

        let decremented = match item.decrement() {
            CartItemDecrement::Decremented(item) => {
                self.cart_item_modifier()
                    .update(&mut connection, &item)
                    .await?;
                DecrementedCartItemDto::Updated(CartItemDto::from(item))
            }
            CartItemDecrement::Exhausted(item) => {
                self.cart_item_modifier()
                    .delete(&mut connection, item.id())
                    .await?;
                tracing::debug!(id = %dto.id, "last copy taken out, cart item removed");
                DecrementedCartItemDto::Removed(CartItemDto::from(item))
            }
        };
        connection.commit().await?;

        Ok(decremented)
    }
}

impl<T> DecrementCartItemService for T where T: DependOnCartItemQuery + DependOnCartItemModifier {}

#[async_trait::async_trait]
pub trait RemoveCartItemService: 'static + Sync + Send + DependOnCartItemModifier {
    /// `Ok(None)` when the item was already gone.
    async fn remove_cart_item(
        &self,
        dto: RemoveCartItemDto,
    ) -> error_stack::Result<Option<CartItemDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CartItemId::new(dto.id);
        let removed = self.cart_item_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        if removed.is_none() {
            tracing::debug!(id = %dto.id, "nothing to remove");
        }
        Ok(removed.map(CartItemDto::from))
    }
}

impl<T> RemoveCartItemService for T where T: DependOnCartItemModifier {}

#[async_trait::async_trait]
pub trait ClearCartService: 'static + Sync + Send + DependOnCartItemModifier {
    async fn clear_cart(&self) -> error_stack::Result<ClearedCartDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let deleted = self.cart_item_modifier().delete_all(&mut connection).await?;
        connection.commit().await?;

        tracing::debug!(deleted, "cart cleared");
        Ok(ClearedCartDto { deleted })
    }
}

impl<T> ClearCartService for T where T: DependOnCartItemModifier {}

#[async_trait::async_trait]
pub trait GetCartService: 'static + Sync + Send + DependOnCartItemQuery {
    async fn get_cart(&self) -> error_stack::Result<Vec<CartItemDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let items = self.cart_item_query().find_all(&mut connection).await?;
        Ok(items.into_iter().map(CartItemDto::from).collect())
    }
}

impl<T> GetCartService for T where T: DependOnCartItemQuery {}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use kernel::KernelError;
    use uuid::Uuid;

    use crate::service::mock::MockDatabase;
    use crate::transfer::{
        CartItemDto, CreateCartItemDto, DecrementCartItemDto, DecrementedCartItemDto,
        RemoveCartItemDto,
    };

    use super::{
        AddCartItemService, ClearCartService, DecrementCartItemService, GetCartService,
        RemoveCartItemService,
    };

    fn dune(quantity: Option<i32>) -> CreateCartItemDto {
        CreateCartItemDto {
            title: "Dune".to_string(),
            authors: "Frank Herbert".to_string(),
            price: Some(9.99),
            quantity,
            isbn13: 9780441172719,
            image_url: None,
        }
    }

    fn good_omens() -> CreateCartItemDto {
        CreateCartItemDto {
            title: "Good Omens".to_string(),
            authors: "Terry Pratchett/Neil Gaiman".to_string(),
            price: None,
            quantity: Some(2),
            isbn13: 9780060853983,
            image_url: Some("https://example.com/good-omens.jpg".to_string()),
        }
    }

    fn decrement(item: &CartItemDto) -> DecrementCartItemDto {
        DecrementCartItemDto { id: item.id }
    }

    #[tokio::test]
    async fn add_defaults_quantity_to_one() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let item = db.add_cart_item(dune(None)).await?;
        assert_eq!(item.quantity, 1);
        assert_eq!(db.get_cart().await?, vec![item]);
        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_invalid_input() {
        let db = MockDatabase::default();
        let invalid = [
            CreateCartItemDto {
                title: "   ".to_string(),
                ..dune(None)
            },
            CreateCartItemDto {
                authors: String::new(),
                ..dune(None)
            },
            CreateCartItemDto {
                isbn13: 441172719,
                ..dune(None)
            },
            CreateCartItemDto {
                price: Some(-1.0),
                ..dune(None)
            },
            CreateCartItemDto {
                price: Some(f64::NAN),
                ..dune(None)
            },
            dune(Some(0)),
            dune(Some(-3)),
        ];
        for dto in invalid {
            let error = db.add_cart_item(dto.clone()).await.unwrap_err();
            assert_eq!(
                error.current_context(),
                &KernelError::Validation,
                "{dto:?} should be rejected"
            );
        }
        assert!(db.get_cart().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_trims_text_and_drops_blank_image() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let item = db
            .add_cart_item(CreateCartItemDto {
                title: "  Dune ".to_string(),
                image_url: Some(" ".to_string()),
                ..dune(None)
            })
            .await?;
        assert_eq!(item.title, "Dune");
        assert_eq!(item.image_url, None);
        Ok(())
    }

    #[tokio::test]
    async fn dune_is_removed_on_third_decrement() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let item = db.add_cart_item(dune(Some(3))).await?;
        assert_eq!(item.quantity, 3);

        let DecrementedCartItemDto::Updated(updated) = db.decrement_cart_item(decrement(&item)).await?
        else {
            panic!("quantity 3 must not be removed");
        };
        assert_eq!(updated.quantity, 2);
        assert_eq!(db.get_cart().await?, vec![updated.clone()]);

        let DecrementedCartItemDto::Updated(updated) = db.decrement_cart_item(decrement(&item)).await?
        else {
            panic!("quantity 2 must not be removed");
        };
        assert_eq!(updated.quantity, 1);

        match db.decrement_cart_item(decrement(&item)).await? {
            DecrementedCartItemDto::Removed(removed) => assert_eq!(removed.id, item.id),
            other => panic!("quantity 1 must be removed, got {other:?}"),
        }
        assert!(db.get_cart().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn decrement_leaves_other_items_alone() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let dune = db.add_cart_item(dune(None)).await?;
        let omens = db.add_cart_item(good_omens()).await?;

        db.decrement_cart_item(decrement(&dune)).await?;

        assert_eq!(db.get_cart().await?, vec![omens]);
        Ok(())
    }

    #[tokio::test]
    async fn decrement_unknown_item_is_not_found() {
        let db = MockDatabase::default();
        let error = db
            .decrement_cart_item(DecrementCartItemDto { id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_decrements_are_not_lost() -> error_stack::Result<(), KernelError> {
        let db = Arc::new(MockDatabase::default());
        let item = db.add_cart_item(dune(Some(12))).await?;

        let tasks = (0..10)
            .map(|_| {
                let db = Arc::clone(&db);
                let dto = decrement(&item);
                tokio::spawn(async move { db.decrement_cart_item(dto).await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.expect("decrement task panicked")?;
        }

        let cart = db.get_cart().await?;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
        Ok(())
    }

    #[tokio::test]
    async fn remove_twice_reports_nothing_the_second_time() -> error_stack::Result<(), KernelError>
    {
        let db = MockDatabase::default();
        let item = db.add_cart_item(good_omens()).await?;
        let dto = RemoveCartItemDto { id: item.id };

        assert_eq!(db.remove_cart_item(dto.clone()).await?, Some(item));
        assert_eq!(db.remove_cart_item(dto).await?, None);
        assert!(db.get_cart().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn clear_empties_the_cart() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        db.add_cart_item(dune(Some(3))).await?;
        db.add_cart_item(good_omens()).await?;

        assert_eq!(db.clear_cart().await?.deleted, 2);
        assert!(db.get_cart().await?.is_empty());
        assert_eq!(db.clear_cart().await?.deleted, 0);
        Ok(())
    }

    #[tokio::test]
    async fn cart_lists_oldest_first() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let first = db.add_cart_item(dune(None)).await?;
        let second = db.add_cart_item(good_omens()).await?;
        assert_eq!(db.get_cart().await?, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn persistence_failure_is_surfaced_and_nothing_is_kept() {
        let db = MockDatabase::failing_writes();
        let error = db.add_cart_item(dune(None)).await.unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Persistence);
        assert!(db.get_cart().await.unwrap().is_empty());
    }
}
