//! In-memory provider for service tests.
//!
//! A transaction holds the whole store locked and works on a staged copy
//! that only replaces the store on commit, which is enough to observe both
//! serialization and rollback from the services' point of view.

use std::sync::Arc;

use error_stack::Report;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, CartItemQuery, DependOnBookQuery, DependOnCartItemQuery,
};
use kernel::interface::update::{CartItemModifier, DependOnCartItemModifier};
use kernel::prelude::entity::{
    Book, BookAuthors, BookGenre, BookId, BookPages, BookRating, BookTitle, CartItem, CartItemId,
    Isbn13, SelectLimit, SelectOffset,
};
use kernel::KernelError;

#[derive(Debug, Clone, Default)]
struct Store {
    cart: Vec<CartItem>,
    books: Vec<Book>,
}

#[derive(Default)]
pub(crate) struct MockDatabase {
    store: Arc<Mutex<Store>>,
    fail_writes: bool,
}

impl MockDatabase {
    pub(crate) fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_catalog(size: usize) -> Self {
        let books = (0..size)
            .map(|n| {
                Book::new(
                    BookId::new(Uuid::new_v4()),
                    BookTitle::new(format!("Volume {n}")),
                    BookAuthors::new("Anonymous"),
                    Isbn13::new(9780000000000_i64 + n as i64),
                    BookGenre::new("fiction"),
                    BookRating::new(4.0),
                    BookPages::new(300),
                    None,
                    None,
                )
            })
            .collect();
        Self {
            store: Arc::new(Mutex::new(Store {
                cart: Vec::new(),
                books,
            })),
            fail_writes: false,
        }
    }
}

pub(crate) struct MockTransaction {
    guard: OwnedMutexGuard<Store>,
    staged: Store,
    fail_writes: bool,
}

impl MockTransaction {
    fn write(&mut self) -> error_stack::Result<&mut Store, KernelError> {
        if self.fail_writes {
            return Err(Report::new(KernelError::Persistence).attach_printable("write refused"));
        }
        Ok(&mut self.staged)
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self {
            mut guard, staged, ..
        } = self;
        *guard = staged;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MockDatabase {
    type Transaction = MockTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = Arc::clone(&self.store).lock_owned().await;
        let staged = guard.clone();
        Ok(MockTransaction {
            guard,
            staged,
            fail_writes: self.fail_writes,
        })
    }
}

pub(crate) struct MockCartItemRepository;

#[async_trait::async_trait]
impl CartItemQuery for MockCartItemRepository {
    type Transaction = MockTransaction;

    async fn find_by_id_for_update(
        &self,
        con: &mut MockTransaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        Ok(con.staged.cart.iter().find(|item| item.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MockTransaction,
    ) -> error_stack::Result<Vec<CartItem>, KernelError> {
        Ok(con.staged.cart.clone())
    }
}

#[async_trait::async_trait]
impl CartItemModifier for MockCartItemRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        con.write()?.cart.push(item.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError> {
        let store = con.write()?;
        if let Some(stored) = store.cart.iter_mut().find(|stored| stored.id() == item.id()) {
            *stored = item.clone();
        }
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MockTransaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError> {
        let store = con.write()?;
        let removed = store
            .cart
            .iter()
            .position(|item| item.id() == id)
            .map(|index| store.cart.remove(index));
        Ok(removed)
    }

    async fn delete_all(&self, con: &mut MockTransaction) -> error_stack::Result<u64, KernelError> {
        let store = con.write()?;
        let deleted = store.cart.len() as u64;
        store.cart.clear();
        Ok(deleted)
    }
}

pub(crate) struct MockBookRepository;

#[async_trait::async_trait]
impl BookQuery for MockBookRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.staged.books.iter().find(|book| book.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MockTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .staged
            .books
            .iter()
            .skip(*offset.as_ref() as usize)
            .take(*limit.as_ref() as usize)
            .cloned()
            .collect())
    }
}

impl DependOnCartItemQuery for MockDatabase {
    type CartItemQuery = MockCartItemRepository;
    fn cart_item_query(&self) -> &Self::CartItemQuery {
        &MockCartItemRepository
    }
}

impl DependOnCartItemModifier for MockDatabase {
    type CartItemModifier = MockCartItemRepository;
    fn cart_item_modifier(&self) -> &Self::CartItemModifier {
        &MockCartItemRepository
    }
}

impl DependOnBookQuery for MockDatabase {
    type BookQuery = MockBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MockBookRepository
    }
}
