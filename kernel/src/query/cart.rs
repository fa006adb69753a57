use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CartItem, CartItemId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartItemQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Finds an item and locks it until `con` is committed or rolled back,
    /// so a read-then-write against the same item cannot interleave with
    /// another transaction doing the same.
    async fn find_by_id_for_update(
        &self,
        con: &mut Self::Transaction,
        id: &CartItemId,
    ) -> error_stack::Result<Option<CartItem>, KernelError>;
    /// Every item in the cart, oldest first.
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<CartItem>, KernelError>;
}

pub trait DependOnCartItemQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CartItemQuery: CartItemQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn cart_item_query(&self) -> &Self::CartItemQuery;
}
