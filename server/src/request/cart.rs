use crate::controller::{Intake, TryIntake};
use application::transfer::{CreateCartItemDto, DecrementCartItemDto, RemoveCartItemDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

/// Body of `POST /cart`. Every field is optional at the wire level so that a
/// missing one is reported as a validation error naming the field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartItemRequest {
    title: Option<String>,
    authors: Option<String>,
    price: Option<f64>,
    quantity: Option<i32>,
    isbn13: Option<i64>,
    image_url: Option<String>,
}

#[derive(Debug)]
pub struct DecrementCartItemRequest {
    id: Uuid,
}

impl DecrementCartItemRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct RemoveCartItemRequest {
    id: Uuid,
}

impl RemoveCartItemRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> error_stack::Result<T, KernelError> {
    value.ok_or_else(|| {
        Report::new(KernelError::Validation).attach_printable(format!("{field} is required"))
    })
}

pub struct CartTransformer;

impl TryIntake<CreateCartItemRequest> for CartTransformer {
    type To = CreateCartItemDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateCartItemRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateCartItemDto {
            title: required("title", input.title)?,
            authors: required("authors", input.authors)?,
            price: input.price,
            quantity: input.quantity,
            isbn13: required("isbn13", input.isbn13)?,
            image_url: input.image_url,
        })
    }
}

impl Intake<DecrementCartItemRequest> for CartTransformer {
    type To = DecrementCartItemDto;
    fn emit(&self, input: DecrementCartItemRequest) -> Self::To {
        DecrementCartItemDto { id: input.id }
    }
}

impl Intake<RemoveCartItemRequest> for CartTransformer {
    type To = RemoveCartItemDto;
    fn emit(&self, input: RemoveCartItemRequest) -> Self::To {
        RemoveCartItemDto { id: input.id }
    }
}
