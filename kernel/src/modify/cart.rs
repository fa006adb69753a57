use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CartItem, CartItemId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartItemModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        item: &CartItem,
    ) -> error_stack::Result<(), KernelError>;
    /// Returns the removed item, or `None` when nothing had that id.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError>;
    /// Returns how many items were removed.
    async fn delete_all(&self, con: &mut Self::Transaction)
        -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnCartItemModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CartItemModifier: CartItemModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn cart_item_modifier(&self) -> &Self::CartItemModifier;
}
